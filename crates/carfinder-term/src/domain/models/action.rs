/// One models fetch issued by a Results screen mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelsRequest {
    pub generation: u64,
    pub make_id: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchMakes(String),
    FetchModels(ModelsRequest),
    CancelModels,
}
