use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::{
    client::{Client as DomainClient, NewClient as DomainNewClient},
    types::{ClientId, GarageId, TypeConstraintError},
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub garage_id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub garage_id: i32,
    pub name: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::new(client.id)?,
            garage_id: GarageId::new(client.garage_id)?,
            name: client.name,
            phone: client.phone,
            email: client.email,
            created_at: client.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            garage_id: client.garage_id.get(),
            name: client.name.as_str(),
            phone: client.phone.as_deref(),
            email: client.email.as_deref(),
        }
    }
}
