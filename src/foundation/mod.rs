pub mod appearance {
    pub use crate::appearance::*;
}

pub mod color {
    pub use crate::color::*;
}

pub mod provider {
    pub use crate::provider::*;
}

pub mod tokens {
    pub use crate::tokens::*;
}
