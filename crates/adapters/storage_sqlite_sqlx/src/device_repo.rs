//! `SQLite` implementation of [`DeviceRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use wattwise_app::ports::DeviceRepository;
use wattwise_domain::device::{Category, Device};
use wattwise_domain::error::WattwiseError;
use wattwise_domain::id::{DeviceId, RoomId};
use wattwise_domain::status::PowerStatus;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Device`].
///
/// Tips live in their own table and are merged in afterwards, so the
/// wrapped device always starts with an empty tip list.
struct Wrapper(Device);

fn decode<E: std::error::Error + Send + Sync + 'static>(err: E) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let room_id: String = row.try_get("room_id")?;
        let category: String = row.try_get("category")?;
        let wattage: i64 = row.try_get("wattage")?;
        let standby_wattage: i64 = row.try_get("standby_wattage")?;
        let has_standby: bool = row.try_get("has_standby")?;
        let status: String = row.try_get("status")?;
        let cost_per_hour: f64 = row.try_get("cost_per_hour")?;
        let efficiency_rating: String = row.try_get("efficiency_rating")?;
        let description: String = row.try_get("description")?;

        Ok(Self(Device {
            id: DeviceId::new(&id).map_err(decode)?,
            name,
            room_id: RoomId::new(&room_id).map_err(decode)?,
            category: Category::from_str(&category).map_err(decode)?,
            wattage: u32::try_from(wattage).map_err(decode)?,
            standby_wattage: u32::try_from(standby_wattage).map_err(decode)?,
            has_standby,
            status: PowerStatus::from_str(&status).map_err(decode)?,
            cost_per_hour,
            efficiency_rating,
            tips: Vec::new(),
            description,
        }))
    }
}

const INSERT: &str = "INSERT INTO devices (id, name, room_id, category, wattage, \
     standby_wattage, has_standby, status, cost_per_hour, efficiency_rating, description) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const INSERT_TIP: &str = "INSERT INTO device_tips (device_id, priority, tip) VALUES (?, ?, ?)";
const SELECT_ALL: &str = "SELECT * FROM devices ORDER BY room_id, id";
const SELECT_TIPS: &str = "SELECT device_id, tip FROM device_tips ORDER BY device_id, priority";
const COUNT: &str = "SELECT COUNT(*) FROM devices";
const UPDATE_STATUS: &str = "UPDATE devices SET status = ? WHERE id = ?";
const UPDATE_STATUS_ALL: &str = "UPDATE devices SET status = ? WHERE id != ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, WattwiseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let tip_rows: Vec<(String, String)> = sqlx::query_as(SELECT_TIPS)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let mut tips: HashMap<String, Vec<String>> = HashMap::new();
            for (device_id, tip) in tip_rows {
                tips.entry(device_id).or_default().push(tip);
            }

            Ok(rows
                .into_iter()
                .map(|w| {
                    let mut device = w.0;
                    if let Some(list) = tips.remove(device.id.as_str()) {
                        device.tips = list;
                    }
                    device
                })
                .collect())
        }
    }

    fn count(&self) -> impl Future<Output = Result<u64, WattwiseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let (count,): (i64,) = sqlx::query_as(COUNT)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(count.unsigned_abs())
        }
    }

    fn insert(&self, device: Device) -> impl Future<Output = Result<(), WattwiseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(device.id.to_string())
                .bind(&device.name)
                .bind(device.room_id.to_string())
                .bind(device.category.as_str())
                .bind(i64::from(device.wattage))
                .bind(i64::from(device.standby_wattage))
                .bind(device.has_standby)
                .bind(device.status.as_str())
                .bind(device.cost_per_hour)
                .bind(&device.efficiency_rating)
                .bind(&device.description)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            for (priority, tip) in device.tips.iter().enumerate() {
                sqlx::query(INSERT_TIP)
                    .bind(device.id.to_string())
                    .bind(i64::try_from(priority).unwrap_or(i64::MAX))
                    .bind(tip)
                    .execute(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
            }

            tx.commit().await.map_err(StorageError::from)?;
            Ok(())
        }
    }

    fn update_status(
        &self,
        id: &DeviceId,
        status: PowerStatus,
    ) -> impl Future<Output = Result<(), WattwiseError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();
        async move {
            sqlx::query(UPDATE_STATUS)
                .bind(status.as_str())
                .bind(id)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn update_status_all(
        &self,
        status: PowerStatus,
        except: &DeviceId,
    ) -> impl Future<Output = Result<(), WattwiseError>> + Send {
        let pool = self.pool.clone();
        let except = except.to_string();
        async move {
            sqlx::query(UPDATE_STATUS_ALL)
                .bind(status.as_str())
                .bind(except)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use wattwise_domain::catalog;

    async fn setup() -> SqliteDeviceRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteDeviceRepository::new(db.pool().clone())
    }

    fn tv() -> Device {
        Device::builder()
            .id("living-tv")
            .unwrap()
            .name("Fernseher")
            .room("living")
            .unwrap()
            .category(Category::Entertainment)
            .wattage(120)
            .standby_wattage(2)
            .cost_per_hour(0.036)
            .efficiency_rating("A+")
            .tip("Ganz ausschalten statt Standby")
            .tip("Helligkeit reduzieren")
            .description("55-Zoll Smart TV")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_insert_and_fetch_device_with_tips_in_priority_order() {
        let repo = setup().await;
        repo.insert(tv()).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        let fetched = &all[0];
        assert_eq!(fetched.id.as_str(), "living-tv");
        assert_eq!(fetched.category, Category::Entertainment);
        assert!(fetched.has_standby);
        assert_eq!(fetched.standby_wattage, 2);
        assert_eq!(
            fetched.tips,
            vec![
                "Ganz ausschalten statt Standby".to_string(),
                "Helligkeit reduzieren".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn should_count_inserted_rows() {
        let repo = setup().await;
        assert_eq!(repo.count().await.unwrap(), 0);
        repo.insert(tv()).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn should_update_single_row_status() {
        let repo = setup().await;
        repo.insert(tv()).await.unwrap();
        let id = DeviceId::new("living-tv").unwrap();

        repo.update_status(&id, PowerStatus::Standby).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all[0].status, PowerStatus::Standby);
    }

    #[tokio::test]
    async fn should_update_all_statuses_except_excluded_row() {
        let repo = setup().await;
        for device in catalog::devices().unwrap() {
            repo.insert(device).await.unwrap();
        }
        let lights = DeviceId::new(catalog::GLOBAL_LIGHTS).unwrap();
        repo.update_status(&lights, PowerStatus::On).await.unwrap();

        repo.update_status_all(PowerStatus::Off, &lights)
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        for device in &all {
            if device.id == lights {
                assert_eq!(device.status, PowerStatus::On);
            } else {
                assert_eq!(device.status, PowerStatus::Off, "{}", device.id);
            }
        }
    }

    #[tokio::test]
    async fn should_order_rows_by_room_then_id() {
        let repo = setup().await;
        for device in catalog::devices().unwrap() {
            repo.insert(device).await.unwrap();
        }

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 23);
        for pair in all.windows(2) {
            let a = (&pair[0].room_id, &pair[0].id);
            let b = (&pair[1].room_id, &pair[1].id);
            assert!(a <= b);
        }
    }

    #[tokio::test]
    async fn should_roundtrip_full_catalog() {
        let repo = setup().await;
        for device in catalog::devices().unwrap() {
            repo.insert(device).await.unwrap();
        }

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 23);
        for device in &all {
            assert!(!device.tips.is_empty(), "{} lost its tips", device.id);
            device.validate().unwrap();
        }
    }
}
