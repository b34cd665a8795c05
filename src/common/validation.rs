// src/common/validation.rs

use validator::ValidationError;

/// Campos obrigatórios não aceitam texto em branco (só espaços).
/// O frontend fazia `value.trim()` antes de salvar; aqui a regra vale na borda.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejeita_texto_em_branco() {
        assert!(not_blank("").is_err());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("\t\n").is_err());
    }

    #[test]
    fn aceita_texto_com_conteudo() {
        assert!(not_blank("Maria").is_ok());
        assert!(not_blank(" ok ").is_ok());
    }
}
