// ============ Model implementations ============

pub(crate) mod vader;

// Public model structs and option enums (for type annotations)
pub use vader::{VaderLexicon, VaderModel};
