//! User-facing strings and the mapping from [`ApiError`] to them.

use api::ApiError;

pub const CONNECTION_ERROR: &str = "Erro de conexão com o servidor.";

pub const LOADING_RECIPES: &str = "Carregando receitas...";
pub const RECIPES_LOAD_FAILED: &str = "Erro ao carregar receitas.";
pub const NO_RECIPES_FOUND: &str = "Nenhuma receita encontrada.";

pub const LOGIN_REQUIRED_TO_SUBMIT: &str = "Você precisa estar logado para enviar uma receita.";
pub const RECIPE_SENT: &str = "Receita enviada com sucesso!";
pub const RECIPE_SEND_FAILED: &str = "Erro ao enviar receita.";

pub const RECIPE_LOAD_FAILED: &str = "Erro ao carregar receita.";

pub const LOADING: &str = "Carregando...";
pub const PROFILE_LOAD_FAILED: &str = "Falha ao obter perfil";

pub const FILL_ALL_FIELDS: &str = "Preencha todos os campos.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "As senhas não coincidem";
pub const LOGIN_FAILED: &str = "Erro ao fazer login.";
pub const REGISTER_FAILED: &str = "Erro ao cadastrar.";
pub const REGISTERED: &str = "Cadastro realizado com sucesso!";
pub const PASSWORD_CHANGE_FAILED: &str = "Erro ao alterar senha.";
pub const PASSWORD_CHANGED: &str = "Senha alterada com sucesso!";

/// Text to show for a failed backend call.
///
/// Connection failures get the generic connection message; server failures
/// show the server's `erro` text when present, else `default`.
pub fn describe_error(err: &ApiError, default: &str) -> String {
    if err.is_connection() {
        return CONNECTION_ERROR.to_string();
    }
    err.server_message()
        .filter(|m| !m.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::Server {
            status: 400,
            message: Some("X".to_string()),
        };
        assert_eq!(describe_error(&err, RECIPE_SEND_FAILED), "X");
    }

    #[test]
    fn test_default_when_server_sent_nothing() {
        let err = ApiError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(describe_error(&err, RECIPES_LOAD_FAILED), RECIPES_LOAD_FAILED);

        let err = ApiError::Server {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(describe_error(&err, RECIPES_LOAD_FAILED), RECIPES_LOAD_FAILED);
    }

    #[test]
    fn test_connection_failure_is_generic() {
        let err = ApiError::Connection("tcp connect error".to_string());
        assert_eq!(describe_error(&err, RECIPE_SEND_FAILED), CONNECTION_ERROR);
    }
}
