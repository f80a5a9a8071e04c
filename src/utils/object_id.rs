use crate::utils::error::AppError;
use mongodb::bson::oid::ObjectId;

const OBJECT_ID_HEX_LEN: usize = 24;

/// Valida e decodifica um ObjectId vindo do path (24 caracteres hex -> 12 bytes).
///
/// Não faz nenhum I/O: ids inválidos são rejeitados antes de chegar no MongoDB.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    if raw.len() != OBJECT_ID_HEX_LEN || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AppError::InvalidIdentifier(raw.to_string()));
    }

    ObjectId::parse_str(raw).map_err(|_| AppError::InvalidIdentifier(raw.to_string()))
}
