// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod orders_csv_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod quantity_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod orders_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod batch_result;
        pub(crate) mod canonical_field;
        pub(crate) mod config;
        pub(crate) mod invoice_document;
        pub(crate) mod invoice_line;
        pub(crate) mod raw_order;
    }
    pub(crate) mod logic {
        pub(crate) mod column_resolver;
        pub(crate) mod invoice_composer;
        pub(crate) mod row_normalizer;
    }
    pub(crate) mod repositories {
        pub(crate) mod orders_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod generate_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod invoice_printer;
    pub(crate) mod utils;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::batch_result::*;
        pub use crate::domain::entities::canonical_field::*;
        pub use crate::domain::entities::config::*;
        pub use crate::domain::entities::invoice_document::*;
        pub use crate::domain::entities::invoice_line::*;
        pub use crate::domain::entities::raw_order::*;
    }
}
