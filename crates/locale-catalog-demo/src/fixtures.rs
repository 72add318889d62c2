//! Deterministic database instances for the demo backend.
//!
//! The n-th instance created (counting from zero) is named and addressed by
//! its position, and comes with one instance-level admin data source plus
//! three databases that each carry an admin, a read-write and a read-only
//! data source.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const EXTERNAL_LINK: &str = "google.com";
const DATABASES_PER_INSTANCE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataSourceType {
    Admin,
    Rw,
    Ro,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: u32,
    pub name: String,
    pub external_link: String,
    pub host: String,
    /// Empty when the engine's default port is used.
    pub port: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Database {
    pub id: u32,
    pub instance_id: u32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub id: u32,
    pub instance_id: u32,
    /// `None` for the instance-level admin data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_id: Option<u32>,
    pub name: String,
    #[serde(rename = "type")]
    pub data_source_type: DataSourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Per-database data sources: name suffix, type and credentials.
const DATABASE_DATA_SOURCES: [(&str, DataSourceType, &str, &str); 3] = [
    ("admin ds2", DataSourceType::Admin, "root", "pwdRoot"),
    ("rw ds3", DataSourceType::Rw, "rootRW", "pwdRW"),
    ("ro ds4", DataSourceType::Ro, "rootRO", "pwdRO"),
];

fn instance_name(index: usize) -> String {
    match index {
        0 => "dev env".to_string(),
        1 => "test env".to_string(),
        2 => "staging env".to_string(),
        _ => format!("prod env {index}"),
    }
}

fn instance_host(index: usize) -> &'static str {
    match index {
        0 => "localhost",
        1 => "127.0.0.1",
        2 => "13.24.32.122",
        _ => "mydb.com",
    }
}

fn instance_port(index: usize) -> &'static str {
    match index {
        0 => "3306",
        1 => "",
        2 => "15202",
        _ => "5432",
    }
}

/// An in-memory record store that assigns ids per collection, starting at 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureStore {
    pub instances: Vec<Instance>,
    pub databases: Vec<Database>,
    pub data_sources: Vec<DataSource>,
}

impl FixtureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `count` instances and everything they own.
    pub fn seed(count: usize) -> Self {
        let mut store = Self::new();
        for _ in 0..count {
            store.create_instance();
        }
        tracing::debug!(
            instances = store.instances.len(),
            databases = store.databases.len(),
            data_sources = store.data_sources.len(),
            "Seeded demo fixtures"
        );
        store
    }

    /// Creates the next instance together with its databases and data sources.
    pub fn create_instance(&mut self) -> &Instance {
        let index = self.instances.len();
        let instance = Instance {
            id: next_id(self.instances.len()),
            name: instance_name(index),
            external_link: EXTERNAL_LINK.to_string(),
            host: instance_host(index).to_string(),
            port: instance_port(index).to_string(),
        };
        let instance_id = instance.id;
        let name = instance.name.clone();
        self.instances.push(instance);

        self.push_data_source(DataSource {
            id: 0,
            instance_id,
            database_id: None,
            name: format!("{name} admin ds1"),
            data_source_type: DataSourceType::Admin,
            username: None,
            password: None,
        });

        for _ in 0..DATABASES_PER_INSTANCE {
            let database_id = next_id(self.databases.len());
            self.databases.push(Database {
                id: database_id,
                instance_id,
                name: format!("{name} db1"),
            });

            for (suffix, data_source_type, username, password) in DATABASE_DATA_SOURCES {
                self.push_data_source(DataSource {
                    id: 0,
                    instance_id,
                    database_id: Some(database_id),
                    // Separated by two spaces.
                    name: format!("{name}  {suffix}"),
                    data_source_type,
                    username: Some(username.to_string()),
                    password: Some(password.to_string()),
                });
            }
        }

        &self.instances[index]
    }

    pub fn instance(&self, id: u32) -> Option<&Instance> {
        self.instances.iter().find(|instance| instance.id == id)
    }

    pub fn databases_of(&self, instance_id: u32) -> impl Iterator<Item = &Database> {
        self.databases
            .iter()
            .filter(move |database| database.instance_id == instance_id)
    }

    /// Data sources of an instance, including those of its databases.
    pub fn data_sources_of(&self, instance_id: u32) -> impl Iterator<Item = &DataSource> {
        self.data_sources
            .iter()
            .filter(move |data_source| data_source.instance_id == instance_id)
    }

    pub fn data_sources_of_database(&self, database_id: u32) -> impl Iterator<Item = &DataSource> {
        self.data_sources
            .iter()
            .filter(move |data_source| data_source.database_id == Some(database_id))
    }

    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn push_data_source(&mut self, mut data_source: DataSource) {
        data_source.id = next_id(self.data_sources.len());
        self.data_sources.push(data_source);
    }
}

fn next_id(len: usize) -> u32 {
    u32::try_from(len).map_or(u32::MAX, |len| len.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "dev env", "localhost", "3306")]
    #[case(1, "test env", "127.0.0.1", "")]
    #[case(2, "staging env", "13.24.32.122", "15202")]
    #[case(3, "prod env 3", "mydb.com", "5432")]
    #[case(7, "prod env 7", "mydb.com", "5432")]
    fn instance_attributes_follow_position(
        #[case] index: usize,
        #[case] name: &str,
        #[case] host: &str,
        #[case] port: &str,
    ) {
        let store = FixtureStore::seed(index + 1);
        let instance = &store.instances[index];

        assert_eq!(instance.name, name);
        assert_eq!(instance.host, host);
        assert_eq!(instance.port, port);
        assert_eq!(instance.external_link, "google.com");
    }

    #[test]
    fn each_instance_owns_three_databases_and_ten_data_sources() {
        let store = FixtureStore::seed(2);

        assert_eq!(store.databases.len(), 6);
        assert_eq!(store.data_sources.len(), 20);
        for instance in &store.instances {
            assert_eq!(store.databases_of(instance.id).count(), 3);
            assert_eq!(store.data_sources_of(instance.id).count(), 10);
        }
    }

    #[test]
    fn instance_level_admin_data_source_has_no_credentials() {
        let store = FixtureStore::seed(1);
        let admin = &store.data_sources[0];

        assert_eq!(admin.name, "dev env admin ds1");
        assert_eq!(admin.data_source_type, DataSourceType::Admin);
        assert_eq!(admin.database_id, None);
        assert_eq!(admin.username, None);
    }

    #[test]
    fn database_data_sources_carry_role_credentials() {
        let store = FixtureStore::seed(1);
        let database = store.databases_of(1).next().unwrap();
        assert_eq!(database.name, "dev env db1");

        let sources: Vec<_> = store
            .data_sources_of_database(database.id)
            .map(|source| {
                (
                    source.name.as_str(),
                    source.data_source_type,
                    source.username.as_deref(),
                    source.password.as_deref(),
                )
            })
            .collect();

        assert_eq!(
            sources,
            vec![
                ("dev env  admin ds2", DataSourceType::Admin, Some("root"), Some("pwdRoot")),
                ("dev env  rw ds3", DataSourceType::Rw, Some("rootRW"), Some("pwdRW")),
                ("dev env  ro ds4", DataSourceType::Ro, Some("rootRO"), Some("pwdRO")),
            ]
        );
    }

    #[test]
    fn ids_are_assigned_per_collection() {
        let store = FixtureStore::seed(2);

        assert_eq!(store.instance(2).map(|instance| instance.name.as_str()), Some("test env"));
        assert_eq!(store.databases.last().map(|database| database.id), Some(6));
        assert_eq!(store.data_sources.last().map(|source| source.id), Some(20));
    }

    #[test]
    fn json_uses_backend_field_names() {
        let value = FixtureStore::seed(1).to_json().unwrap();

        assert_eq!(value["instances"][0]["externalLink"], "google.com");
        assert_eq!(value["dataSources"][1]["type"], "ADMIN");
        assert_eq!(value["dataSources"][2]["type"], "RW");
        assert_eq!(value["dataSources"][1]["databaseId"], 1);
        assert!(value["dataSources"][0].get("databaseId").is_none());
    }
}
