pub mod context;
pub mod file;
pub mod scanner;
pub mod walker;

pub use context::{UnresolvedPolicy, VariableBindings};
pub use file::substitute;
pub use scanner::{placeholders, scan, PlaceholderToken, Segment};
pub use walker::{
    apply, execute_substitution, plan_substitution, PlannedRewrite, SubstitutionPlan,
    SubstitutionReport,
};
