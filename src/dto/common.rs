use serde::Serialize;

/// Resposta informativa simples, usada nas remoções e nas consultas
/// por id que não encontram registro
#[derive(Debug, Serialize)]
pub struct MensagemResponse {
    pub mensagem: String,
}

impl MensagemResponse {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
        }
    }
}
