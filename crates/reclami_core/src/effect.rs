#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET for `query`; the reply comes back as `Msg::SearchCompleted`.
    SearchRequested {
        request_id: crate::RequestId,
        query: String,
    },
}
