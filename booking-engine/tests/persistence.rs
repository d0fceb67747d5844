//! 持久化测试 - redb 文件存储的读写、回退与写入失败

use booking_engine::store::StorageResult;
use booking_engine::{
    BookingController, DatasetKey, KeyValueStore, LocalStore, StorageError,
};
use chrono::NaiveDate;
use shared::error::ErrorCode;
use shared::models::{CustomerCreate, GameTable, Order, OrderDraft, OrderStatus, PriceTable, TableType};
use std::cell::RefCell;
use std::collections::HashMap;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn draft(location: &str, day: u32, status: OrderStatus) -> OrderDraft {
    OrderDraft {
        customer_id: "cust_1".to_string(),
        event_location: location.to_string(),
        event_date: NaiveDate::from_ymd_opt(2024, 5, day),
        start_time: "18:30".to_string(),
        tables: vec![
            GameTable::new(TableType::PartyMirror, 1),
            GameTable::new(TableType::Roulette, 2),
        ],
        status,
        ..OrderDraft::default()
    }
}

#[test]
fn test_reopen_file_restores_all_datasets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookings.redb");

    let (saved, customer_id, staff_id) = {
        let store = LocalStore::open(&path).unwrap();
        let mut ctl = BookingController::load(store, true, today());
        let saved = ctl
            .save_order(draft("Hotel Hilton, Praha", 12, OrderStatus::Completed))
            .unwrap();
        let customer = ctl
            .add_customer(CustomerCreate {
                name: "Grand Hotel Pupp".to_string(),
                contact_person: "Alena Horáková".to_string(),
                phone: "+420 353 109 111".to_string(),
                email: "events@pupp.cz".to_string(),
            })
            .unwrap();
        let member = ctl.add_staff("Ondřej Veselý").unwrap();
        ctl.save_prices(PriceTable::default().with_price(TableType::Roulette, 9000.0))
            .unwrap();
        (saved, customer.id, member.id)
    };

    // demo defaults are ignored once datasets exist
    let store = LocalStore::open(&path).unwrap();
    let ctl = BookingController::load(store, false, today());

    assert_eq!(ctl.orders().len(), 3);
    assert_eq!(ctl.order(&saved.id), Some(&saved));
    assert_eq!(ctl.customer_name(&customer_id), "Grand Hotel Pupp");
    assert!(ctl.staff().iter().any(|s| s.id == staff_id));
    assert_eq!(ctl.prices().price_of(TableType::Roulette), 9000.0);
    // saved before the tariff change: frozen at 2×8000 + 4000
    assert_eq!(ctl.order(&saved.id).unwrap().total_price, 20000.0);
}

#[test]
fn test_stored_order_keeps_exact_wire_values() {
    let store = LocalStore::open_in_memory().unwrap();
    let mut ctl = BookingController::load(store.clone(), false, today());
    ctl.save_order(draft("O2 Arena", 20, OrderStatus::Cancelled))
        .unwrap();

    let bytes = store.read_bytes(DatasetKey::Orders.as_str()).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let order = &json[0];
    assert_eq!(order["status"], "Zrušeno");
    assert_eq!(order["eventDate"], "2024-05-20");
    assert_eq!(order["startTime"], "18:30");
    assert_eq!(order["tables"][0]["type"], "Partyzrcadlo");
    assert_eq!(order["tables"][1]["type"], "Americká Ruleta");

    // decode → encode is byte-identical
    let decoded: Vec<Order> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(serde_json::to_vec(&decoded).unwrap(), bytes);
}

#[test]
fn test_corrupt_dataset_falls_back_without_touching_others() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookings.redb");

    {
        let store = LocalStore::open(&path).unwrap();
        let ctl = BookingController::load(store.clone(), true, today());
        ctl.commit_all().unwrap();
        store
            .write_bytes(DatasetKey::Orders.as_str(), b"[{\"id\": 1}")
            .unwrap();
    }

    let store = LocalStore::open(&path).unwrap();
    let ctl = BookingController::load(store, false, today());
    assert!(ctl.orders().is_empty());
    assert_eq!(ctl.customers().len(), 2);
    assert_eq!(ctl.staff().len(), 3);
}

fn io_error(msg: &str) -> StorageError {
    StorageError::Storage(redb::StorageError::Io(std::io::Error::other(msg.to_string())))
}

/// Store whose writes always fail; reads come from a preset map
#[derive(Default)]
struct ReadOnlyStore {
    data: HashMap<String, Vec<u8>>,
    attempts: RefCell<Vec<String>>,
}

impl KeyValueStore for ReadOnlyStore {
    fn read_bytes(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.data.get(key).cloned())
    }

    fn write_bytes(&self, key: &str, _value: &[u8]) -> StorageResult<()> {
        self.attempts.borrow_mut().push(key.to_string());
        Err(io_error("read-only medium"))
    }
}

#[test]
fn test_write_failure_keeps_session_state() {
    let mut ctl = BookingController::load(ReadOnlyStore::default(), true, today());

    let order = ctl
        .save_order(draft("Zámek Konopiště", 15, OrderStatus::Pending))
        .unwrap();
    let member = ctl.add_staff("Jiří Procházka").unwrap();
    ctl.delete_order("ord_1").unwrap();

    assert!(ctl.order(&order.id).is_some());
    assert!(ctl.order("ord_1").is_none());
    assert!(ctl.staff().contains(&member));
    assert_eq!(
        *ctl.store().attempts.borrow(),
        vec!["orders".to_string(), "staff".to_string(), "orders".to_string()]
    );
}

#[test]
fn test_commit_all_reports_the_failed_dataset() {
    let ctl = BookingController::load(ReadOnlyStore::default(), true, today());

    let err = ctl.commit_all().unwrap_err();
    assert_eq!(err.code, ErrorCode::DatabaseError);
    assert_eq!(err.detail_str("dataset"), Some("orders"));
    // stops at the first failure
    assert_eq!(*ctl.store().attempts.borrow(), vec!["orders".to_string()]);
}

#[test]
fn test_unreadable_store_uses_defaults() {
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn read_bytes(&self, _key: &str) -> StorageResult<Option<Vec<u8>>> {
            Err(io_error("disk gone"))
        }

        fn write_bytes(&self, _key: &str, _value: &[u8]) -> StorageResult<()> {
            Ok(())
        }
    }

    let ctl = BookingController::load(BrokenStore, false, today());
    assert!(ctl.orders().is_empty());
    assert_eq!(ctl.prices(), &PriceTable::default());
}
