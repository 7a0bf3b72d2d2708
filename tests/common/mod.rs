#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use userdeck::api::{ApiError, UsersApi};
use userdeck::models::{NewUser, Role, UserRecord, UsersPage};

/// In-memory users collection that fails every request while `failing` is set.
#[derive(Default)]
pub struct FakeUsersApi {
    pub store: Mutex<Vec<UserRecord>>,
    pub calls: Mutex<Vec<String>>,
    next_id: AtomicU32,
    failing: AtomicBool,
}

impl FakeUsersApi {
    pub fn with_users(count: u32) -> Self {
        let api = FakeUsersApi::default();
        {
            let mut store = api.store.lock().unwrap();
            for n in 1..=count {
                store.push(user(&format!("u{}", n), &format!("User {}", n), Role::User));
            }
        }
        api.next_id.store(count, Ordering::SeqCst);
        api
    }

    pub fn with_records(records: Vec<UserRecord>) -> Self {
        let api = FakeUsersApi::default();
        api.next_id.store(records.len() as u32, Ordering::SeqCst);
        *api.store.lock().unwrap() = records;
        api
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored_ids(&self) -> Vec<String> {
        self.store.lock().unwrap().iter().map(|u| u.id.clone()).collect()
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                method: call,
                url: "http://fake/api/users".into(),
                status: 500,
            });
        }
        Ok(())
    }
}

pub fn user(id: &str, name: &str, role: Role) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        role,
    }
}

impl UsersApi for FakeUsersApi {
    async fn list_users(&self, page: u32, limit: u32) -> Result<UsersPage, ApiError> {
        self.record(format!("GET page={} limit={}", page, limit))?;
        let store = self.store.lock().unwrap();
        let limit = limit.max(1) as usize;
        let total_pages = store.len().div_ceil(limit) as u32;
        let start = (page.max(1) as usize - 1) * limit;
        let users = store.iter().skip(start).take(limit).cloned().collect();
        Ok(UsersPage { users, total_pages })
    }

    async fn create_user(&self, draft: &NewUser) -> Result<UserRecord, ApiError> {
        self.record(format!("POST {}", draft.name))?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = UserRecord {
            id: format!("u{}", id),
            name: draft.name.clone(),
            email: draft.email.clone(),
            role: draft.role,
        };
        self.store.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_user(&self, user: &UserRecord) -> Result<(), ApiError> {
        self.record(format!("PATCH {}", user.id))?;
        for u in self.store.lock().unwrap().iter_mut().filter(|u| u.id == user.id) {
            *u = user.clone();
        }
        Ok(())
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE {}", id))?;
        self.store.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}

/// Collection of three one-user pages whose list responses are held until
/// the test releases them with [`GatedUsersApi::release`].
#[derive(Default)]
pub struct GatedUsersApi {
    gates: Mutex<HashMap<u32, Arc<Notify>>>,
}

impl GatedUsersApi {
    fn gate(&self, page: u32) -> Arc<Notify> {
        self.gates.lock().unwrap().entry(page).or_default().clone()
    }

    pub fn release(&self, page: u32) {
        self.gate(page).notify_one();
    }
}

impl UsersApi for GatedUsersApi {
    async fn list_users(&self, page: u32, _limit: u32) -> Result<UsersPage, ApiError> {
        let gate = self.gate(page);
        gate.notified().await;
        Ok(UsersPage {
            users: vec![user(&format!("p{}", page), &format!("page {}", page), Role::User)],
            total_pages: 3,
        })
    }

    async fn create_user(&self, draft: &NewUser) -> Result<UserRecord, ApiError> {
        Ok(user("created", &draft.name, draft.role))
    }

    async fn update_user(&self, _user: &UserRecord) -> Result<(), ApiError> {
        Ok(())
    }

    async fn delete_user(&self, _id: &str) -> Result<(), ApiError> {
        Ok(())
    }
}
