// polyspell-core: leaf types shared by the facade, its backends and the CLI.

pub mod attribute;
pub mod case;
pub mod locale;
pub mod tag;
