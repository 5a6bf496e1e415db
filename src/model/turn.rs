/// One completed request/response cycle. `raw_response` is the completion
/// exactly as the endpoint returned it; `sanitized_text` is the canonical
/// narration after reasoning markup has been stripped.
#[derive(Debug, Clone)]
pub struct NarrationTurn {
    pub raw_response: String,
    pub sanitized_text: String,
}
