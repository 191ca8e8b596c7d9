use std::sync::Arc;

use super::resource::{Messages, Resource};
use crate::models::Car;
use crate::repository::CrudRepository;
use crate::state::AppState;

impl Resource for Car {
    const MESSAGES: Messages = Messages {
        list_failed: "Não foi possível acessar a listagem de carros.",
        find_failed: "Não foi possível encontrar o carro.",
        created: "Carro cadastrado com sucesso!",
        create_failed: "Erro ao cadastrar o carro. Entre em contato com o administrador do sistema.",
        updated: "Carro atualizado com sucesso!",
        update_failed: "Não foi possível atualizar o carro. Entre em contato com o administrador do sistema.",
        removed: "O carro foi removido com sucesso!",
        remove_failed: "Erro ao remover o carro. Entre em contato com o administrador do sistema.",
    };

    fn repository(state: &AppState) -> Arc<dyn CrudRepository<Self>> {
        state.cars.clone()
    }
}
