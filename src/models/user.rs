use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

/// Usuário (armazenado no MongoDB)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,
}

/// `null` vale o mesmo que campo ausente
fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request para criar usuário
///
/// Campos ausentes ou `null` viram string vazia. Qualquer `id` enviado pelo cliente é
/// ignorado: o id é sempre gerado pelo serviço.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl CreateUserRequest {
    pub fn into_user(self, id: ObjectId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Representação externa (id como hex de 24 caracteres)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
        }
    }
}
