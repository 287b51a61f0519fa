// crates/usecase/src/options.rs
use decompose_inp_domain::options::TrailingRun;
use decompose_inp_shared_kernel::EntityKind;
use derive_builder::Builder;

#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct DecomposeOptions {
    /// Kind of the host entity each sub-system is collected into.
    #[builder(default)]
    pub group_kind: EntityKind,
    #[builder(default)]
    pub trailing_run: TrailingRun,
}
