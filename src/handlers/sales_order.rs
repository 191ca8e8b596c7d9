use std::sync::Arc;

use super::resource::{Messages, Resource};
use crate::models::SalesOrder;
use crate::repository::CrudRepository;
use crate::state::AppState;

impl Resource for SalesOrder {
    const MESSAGES: Messages = Messages {
        list_failed: "Não foi possível acessar a listagem de pedidos.",
        find_failed: "Não foi possível encontrar o pedido.",
        created: "Pedido cadastrado com sucesso!",
        create_failed: "Erro ao cadastrar o pedido. Entre em contato com o administrador do sistema.",
        updated: "Pedido atualizado com sucesso!",
        update_failed: "Não foi possível atualizar o pedido. Entre em contato com o administrador do sistema.",
        removed: "O pedido foi removido com sucesso!",
        remove_failed: "Erro ao remover o pedido. Entre em contato com o administrador do sistema.",
    };

    fn repository(state: &AppState) -> Arc<dyn CrudRepository<Self>> {
        state.sales_orders.clone()
    }
}
