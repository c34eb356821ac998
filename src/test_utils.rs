//! In-memory collaborators for unit tests

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::{
    config::{CatalogSource, Config, DatabaseConfig, JwtConfig, OAuthConfig, ServerConfig},
    access::{AuthProvider, OAuthRedirect, SessionChange, SessionEvent},
    error::{AppError, AppResult},
    models::{
        ActivityMap, ChildRows, NewProblem, Problem, Role, Session, SessionUser, Taxonomy,
        TaxonomyEntry,
    },
    store::{ContentStore, ProgressStore, RoleStore},
};

/// Configuration that never touches the environment
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://localhost/dsa_sprint_test".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            expiry_hours: 1,
        },
        oauth: OAuthConfig::default(),
        catalog: CatalogSource::Sample,
    }
}

/// A signed-in session for a fresh user
pub fn sample_session() -> Session {
    let id = Uuid::new_v4();
    Session {
        access_token: format!("token-{}", id),
        token_type: "Bearer".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
        user: SessionUser {
            id,
            email: format!("{}@example.com", id.simple()),
            username: "sprinter".to_string(),
        },
    }
}

/// Auth provider that records call order and lets tests push events
pub struct FakeAuthProvider {
    session: Mutex<Option<Session>>,
    events: broadcast::Sender<SessionEvent>,
    step: AtomicUsize,
    subscribed_at: AtomicUsize,
    fetched_at: AtomicUsize,
}

impl FakeAuthProvider {
    pub fn with_session(session: Option<Session>) -> Self {
        let (events, _) = broadcast::channel(8);
        Self {
            session: Mutex::new(session),
            events,
            step: AtomicUsize::new(1),
            subscribed_at: AtomicUsize::new(0),
            fetched_at: AtomicUsize::new(0),
        }
    }

    pub fn emit(&self, event: SessionEvent) {
        *self.session.lock().unwrap() = event.session.clone();
        let _ = self.events.send(event);
    }

    pub fn subscribed_before_fetch(&self) -> bool {
        let subscribed = self.subscribed_at.load(Ordering::SeqCst);
        let fetched = self.fetched_at.load(Ordering::SeqCst);
        subscribed != 0 && fetched != 0 && subscribed < fetched
    }

    fn tick(&self) -> usize {
        self.step.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthProvider for FakeAuthProvider {
    async fn get_session(&self) -> AppResult<Option<Session>> {
        self.fetched_at.store(self.tick(), Ordering::SeqCst);
        Ok(self.session.lock().unwrap().clone())
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.subscribed_at.store(self.tick(), Ordering::SeqCst);
        self.events.subscribe()
    }

    async fn sign_up(&self, email: &str, _password: &str, username: &str) -> AppResult<SessionUser> {
        Ok(SessionUser {
            id: Uuid::new_v4(),
            email: email.to_string(),
            username: username.to_string(),
        })
    }

    async fn sign_in_with_password(&self, _email: &str, _password: &str) -> AppResult<Session> {
        let session = sample_session();
        self.emit(SessionEvent {
            change: SessionChange::SignedIn,
            session: Some(session.clone()),
            observed_at: Utc::now(),
        });
        Ok(session)
    }

    async fn sign_in_with_oauth(&self, provider: &str) -> AppResult<OAuthRedirect> {
        Ok(OAuthRedirect {
            provider: provider.to_string(),
            url: format!("https://auth.example.com/{}", provider),
            state: "state".to_string(),
        })
    }

    async fn sign_out(&self) -> AppResult<()> {
        self.emit(SessionEvent {
            change: SessionChange::SignedOut,
            session: None,
            observed_at: Utc::now(),
        });
        Ok(())
    }
}

#[derive(Default)]
struct MemoryState {
    problems: Vec<Problem>,
    rows: Vec<(Uuid, ChildRows)>,
    patterns: Vec<TaxonomyEntry>,
    companies: Vec<TaxonomyEntry>,
    roles: HashSet<(Uuid, Role)>,
    activity: HashMap<Uuid, ActivityMap>,
}

/// Non-transactional store with failure injection
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    fail_table: Option<&'static str>,
    fail_delete: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every insert into `table` fail
    pub fn failing_on(mut self, table: &'static str) -> Self {
        self.fail_table = Some(table);
        self
    }

    /// Make problem deletion fail
    pub fn failing_delete(self) -> Self {
        self.fail_delete.store(true, Ordering::SeqCst);
        self
    }

    pub fn with_taxonomy(self, taxonomy: Taxonomy, names: &[&str]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let entries: Vec<TaxonomyEntry> = names
                .iter()
                .map(|name| TaxonomyEntry {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                    slug: crate::models::slugify(name),
                })
                .collect();
            match taxonomy {
                Taxonomy::Patterns => state.patterns.extend(entries),
                Taxonomy::Companies => state.companies.extend(entries),
            }
        }
        self
    }

    pub fn grant(&self, user_id: Uuid, role: Role) {
        self.state.lock().unwrap().roles.insert((user_id, role));
    }

    pub fn problem_count(&self) -> usize {
        self.state.lock().unwrap().problems.len()
    }

    /// Rows stored in a dependent table
    pub fn row_count(&self, table: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|(_, rows)| rows.table() == table)
            .map(|(_, rows)| rows.len())
            .sum()
    }
}

fn owner(rows: &ChildRows) -> Option<Uuid> {
    match rows {
        ChildRows::Tags(r) => r.first().map(|x| x.problem_id),
        ChildRows::Patterns(r) => r.first().map(|x| x.problem_id),
        ChildRows::Companies(r) => r.first().map(|x| x.problem_id),
        ChildRows::Examples(r) => r.first().map(|x| x.problem_id),
        ChildRows::Hints(r) => r.first().map(|x| x.problem_id),
        ChildRows::Solutions(r) => r.first().map(|x| x.problem_id),
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn insert_problem(&self, row: &NewProblem) -> AppResult<Problem> {
        let mut state = self.state.lock().unwrap();
        if state.problems.iter().any(|p| p.slug == row.slug) {
            return Err(AppError::AlreadyExists("Resource already exists".to_string()));
        }

        let now = Utc::now();
        let problem = Problem {
            id: Uuid::new_v4(),
            title: row.title.clone(),
            slug: row.slug.clone(),
            difficulty: row.difficulty.as_str().to_string(),
            problem_statement: row.problem_statement.clone(),
            constraints: row.constraints.clone(),
            created_by: row.created_by,
            created_at: now,
            updated_at: now,
        };
        state.problems.push(problem.clone());
        Ok(problem)
    }

    async fn insert_rows(&self, rows: &ChildRows) -> AppResult<u64> {
        if self.fail_table == Some(rows.table()) {
            return Err(AppError::Backend(format!("insert into {} rejected", rows.table())));
        }

        let mut state = self.state.lock().unwrap();
        let problem_id = owner(rows).ok_or_else(|| AppError::Validation("empty batch".to_string()))?;
        if !state.problems.iter().any(|p| p.id == problem_id) {
            return Err(AppError::Backend("violates foreign key constraint".to_string()));
        }
        state.rows.push((problem_id, rows.clone()));
        Ok(rows.len() as u64)
    }

    async fn delete_problem(&self, id: Uuid) -> AppResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(AppError::Backend("connection lost".to_string()));
        }

        let mut state = self.state.lock().unwrap();
        state.problems.retain(|p| p.id != id);
        state.rows.retain(|(owner, _)| *owner != id);
        Ok(())
    }

    async fn find_problem_by_slug(&self, slug: &str) -> AppResult<Option<Problem>> {
        let state = self.state.lock().unwrap();
        Ok(state.problems.iter().find(|p| p.slug == slug).cloned())
    }

    async fn select_ordered(&self, taxonomy: Taxonomy) -> AppResult<Vec<TaxonomyEntry>> {
        let state = self.state.lock().unwrap();
        let mut entries = match taxonomy {
            Taxonomy::Patterns => state.patterns.clone(),
            Taxonomy::Companies => state.companies.clone(),
        };
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

#[async_trait]
impl RoleStore for MemoryStore {
    async fn query_role(&self, user_id: Uuid, role: Role) -> AppResult<bool> {
        Ok(self.state.lock().unwrap().roles.contains(&(user_id, role)))
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn record_solve(&self, user_id: Uuid, day: NaiveDate) -> AppResult<u32> {
        let mut state = self.state.lock().unwrap();
        let count = state.activity.entry(user_id).or_default().entry(day).or_default();
        *count += 1;
        Ok(*count)
    }

    async fn activity(&self, user_id: Uuid) -> AppResult<ActivityMap> {
        let state = self.state.lock().unwrap();
        Ok(state.activity.get(&user_id).cloned().unwrap_or_default())
    }
}
