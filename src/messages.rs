//! User-facing texts.

use crate::keywords::KeywordStore;

/// Sent when no keyword matches.
pub const FALLBACK_MESSAGE: &str = "Desculpe, não encontrei informações sobre esse tema. \
     Tente usar palavras como 'plr', 'licença saúde', 'campanha salarial', 'filiação' ou 'vales'. \
     Ou digite /help para ver todas as opções.";

/// Sent when a directly chosen topic does not exist.
pub const TOPIC_NOT_FOUND_MESSAGE: &str = "Informação não encontrada.";

/// Greeting for `/start`.
#[must_use]
pub fn welcome_message(name: &str) -> String {
    format!(
        "Olá, {name}. Sou a assistente do BancariosOnLine, criada para orientar bancárias e bancários \
         sobre seus direitos previstos nos ACTs e CCTs da categoria.\n\n\
         Digite uma palavra-chave como 'plr', 'filiação' ou 'campanha salarial' e eu mostro o que \
         mudou com base nos acordos mais recentes.\n\n\
         💡 Dica: você também pode usar o comando /help para ver todas as palavras-chave \
         disponíveis ou clicar nos botões abaixo."
    )
}

/// Keyword listing for `/help`.
#[must_use]
pub fn help_message(store: &KeywordStore) -> String {
    let keywords = store.sorted_keywords().join(", ");
    format!(
        "📖 Lista de palavras-chave disponíveis:\n\n\
         {keywords}\n\n\
         Você pode digitar uma delas ou clicar nos botões que aparecem ao iniciar o bot (/start)."
    )
}
