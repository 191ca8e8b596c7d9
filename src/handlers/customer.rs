use std::sync::Arc;

use super::resource::{Messages, Resource};
use crate::models::Customer;
use crate::repository::CrudRepository;
use crate::state::AppState;

impl Resource for Customer {
    const MESSAGES: Messages = Messages {
        list_failed: "Não foi possível acessar a listagem de clientes.",
        find_failed: "Não foi possível encontrar o cliente.",
        created: "Cliente cadastrado com sucesso!",
        create_failed: "Erro ao cadastrar o cliente. Entre em contato com o administrador do sistema.",
        updated: "Cliente atualizado com sucesso!",
        update_failed: "Não foi possível atualizar o cliente. Entre em contato com o administrador do sistema.",
        removed: "O cliente foi removido com sucesso!",
        remove_failed: "Erro ao remover o cliente. Entre em contato com o administrador do sistema.",
    };

    fn repository(state: &AppState) -> Arc<dyn CrudRepository<Self>> {
        state.customers.clone()
    }
}
