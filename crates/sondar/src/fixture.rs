//! Fixture management: ordered setup and teardown of shared test resources
//!
//! Per-test browser sessions are async and live in the suites themselves;
//! the machinery here serves synchronous shared setup (logging init, data
//! seeding) with priority-ordered setup, reverse-order teardown, and
//! rollback when a setup step fails partway.

use crate::result::{SondarError, SondarResult};
use std::any::TypeId;
use std::collections::HashMap;

/// Trait for test fixtures that can be set up and torn down.
///
/// # Example
///
/// ```ignore
/// struct LoggingFixture;
///
/// impl Fixture for LoggingFixture {
///     fn setup(&mut self) -> SondarResult<()> {
///         init_tracing();
///         Ok(())
///     }
///
///     fn teardown(&mut self) -> SondarResult<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait Fixture: Send + Sync {
    /// Set up the fixture before test execution.
    ///
    /// # Errors
    ///
    /// Returns an error if fixture setup fails.
    fn setup(&mut self) -> SondarResult<()>;

    /// Tear down the fixture after test execution.
    ///
    /// # Errors
    ///
    /// Returns an error if fixture teardown fails.
    fn teardown(&mut self) -> SondarResult<()>;

    /// Get the fixture name for logging/debugging.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Get fixture priority (higher = set up first, tear down last).
    fn priority(&self) -> i32 {
        0
    }
}

/// State of a fixture in the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureState {
    /// Fixture is registered but not set up.
    Registered,
    /// Fixture has been set up successfully.
    SetUp,
    /// Fixture has been torn down.
    TornDown,
    /// Fixture setup failed.
    Failed,
}

struct FixtureEntry {
    fixture: Box<dyn Fixture>,
    state: FixtureState,
    priority: i32,
}

/// Manager for test fixtures with priority-ordered setup and teardown.
///
/// Setup runs highest priority first; teardown runs in reverse setup
/// order. If a setup step fails, fixtures already set up are torn down
/// before the error is returned.
#[derive(Default)]
pub struct FixtureManager {
    fixtures: HashMap<TypeId, FixtureEntry>,
    setup_order: Vec<TypeId>,
}

impl std::fmt::Debug for FixtureManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureManager")
            .field("fixture_count", &self.fixtures.len())
            .field("setup_order", &self.setup_order.len())
            .finish()
    }
}

impl FixtureManager {
    /// Create a new fixture manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fixture with the manager.
    ///
    /// If a fixture of the same type is already registered, it is replaced.
    pub fn register<F: Fixture + 'static>(&mut self, fixture: F) {
        let type_id = TypeId::of::<F>();
        let priority = fixture.priority();

        let _ = self.fixtures.insert(
            type_id,
            FixtureEntry {
                fixture: Box::new(fixture),
                state: FixtureState::Registered,
                priority,
            },
        );
    }

    /// Check if a fixture type is registered.
    #[must_use]
    pub fn is_registered<F: Fixture + 'static>(&self) -> bool {
        self.fixtures.contains_key(&TypeId::of::<F>())
    }

    /// Get the number of registered fixtures.
    #[must_use]
    pub fn count(&self) -> usize {
        self.fixtures.len()
    }

    /// Get the state of a fixture.
    #[must_use]
    pub fn state<F: Fixture + 'static>(&self) -> Option<FixtureState> {
        self.fixtures.get(&TypeId::of::<F>()).map(|e| e.state)
    }

    /// Set up all registered fixtures in priority order (highest first).
    ///
    /// # Errors
    ///
    /// Returns an error if any fixture setup fails. Previously set up
    /// fixtures are torn down before returning the error.
    pub fn setup_all(&mut self) -> SondarResult<()> {
        let mut ordered: Vec<(TypeId, i32)> = self
            .fixtures
            .iter()
            .map(|(id, e)| (*id, e.priority))
            .collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1));

        self.setup_order.clear();

        let mut failure: Option<String> = None;

        for (type_id, _) in ordered {
            if let Some(entry) = self.fixtures.get_mut(&type_id) {
                if entry.state == FixtureState::Registered || entry.state == FixtureState::TornDown
                {
                    if let Err(e) = entry.fixture.setup() {
                        let name = entry.fixture.name().to_string();
                        entry.state = FixtureState::Failed;
                        failure = Some(format!("Fixture '{name}' setup failed: {e}"));
                        break;
                    }
                    entry.state = FixtureState::SetUp;
                    self.setup_order.push(type_id);
                }
            }
        }

        // Roll back anything already set up before surfacing the failure;
        // the setup error wins over any teardown error during rollback
        if let Some(message) = failure {
            let _ = self.teardown_setup_order();
            return Err(SondarError::FixtureError { message });
        }

        Ok(())
    }

    /// Tear down all fixtures in reverse setup order.
    ///
    /// # Errors
    ///
    /// Returns an error if any fixture teardown fails. Remaining fixtures
    /// are still torn down, but the first error is returned.
    pub fn teardown_all(&mut self) -> SondarResult<()> {
        self.teardown_setup_order()
    }

    fn teardown_setup_order(&mut self) -> SondarResult<()> {
        let mut first_error: Option<SondarError> = None;

        for type_id in self.setup_order.iter().rev() {
            if let Some(entry) = self.fixtures.get_mut(type_id) {
                if entry.state == FixtureState::SetUp {
                    if let Err(e) = entry.fixture.teardown() {
                        if first_error.is_none() {
                            first_error = Some(SondarError::FixtureError {
                                message: format!(
                                    "Fixture '{}' teardown failed: {e}",
                                    entry.fixture.name()
                                ),
                            });
                        }
                        entry.state = FixtureState::Failed;
                    } else {
                        entry.state = FixtureState::TornDown;
                    }
                }
            }
        }

        self.setup_order.clear();

        if let Some(err) = first_error {
            Err(err)
        } else {
            Ok(())
        }
    }

    /// Set up a specific fixture by type.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is not registered or setup fails.
    pub fn setup<F: Fixture + 'static>(&mut self) -> SondarResult<()> {
        let type_id = TypeId::of::<F>();

        let entry = self
            .fixtures
            .get_mut(&type_id)
            .ok_or_else(|| SondarError::FixtureError {
                message: format!("Fixture '{}' not registered", std::any::type_name::<F>()),
            })?;

        if entry.state == FixtureState::SetUp {
            return Ok(());
        }

        entry
            .fixture
            .setup()
            .map_err(|e| SondarError::FixtureError {
                message: format!("Fixture '{}' setup failed: {e}", entry.fixture.name()),
            })?;

        entry.state = FixtureState::SetUp;

        if !self.setup_order.contains(&type_id) {
            self.setup_order.push(type_id);
        }

        Ok(())
    }

    /// Tear down a specific fixture by type.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture is not registered or teardown fails.
    pub fn teardown<F: Fixture + 'static>(&mut self) -> SondarResult<()> {
        let type_id = TypeId::of::<F>();

        let entry = self
            .fixtures
            .get_mut(&type_id)
            .ok_or_else(|| SondarError::FixtureError {
                message: format!("Fixture '{}' not registered", std::any::type_name::<F>()),
            })?;

        if entry.state != FixtureState::SetUp {
            return Ok(());
        }

        entry
            .fixture
            .teardown()
            .map_err(|e| SondarError::FixtureError {
                message: format!("Fixture '{}' teardown failed: {e}", entry.fixture.name()),
            })?;

        entry.state = FixtureState::TornDown;
        self.setup_order.retain(|id| *id != type_id);

        Ok(())
    }

    /// Reset all fixtures to the registered state without running teardown.
    pub fn reset(&mut self) {
        for entry in self.fixtures.values_mut() {
            entry.state = FixtureState::Registered;
        }
        self.setup_order.clear();
    }

    /// Unregister a fixture by type.
    pub fn unregister<F: Fixture + 'static>(&mut self) -> bool {
        let type_id = TypeId::of::<F>();
        self.setup_order.retain(|id| *id != type_id);
        self.fixtures.remove(&type_id).is_some()
    }

    /// Clear all registered fixtures.
    pub fn clear(&mut self) {
        self.fixtures.clear();
        self.setup_order.clear();
    }

    /// List all registered fixture names.
    #[must_use]
    pub fn list(&self) -> Vec<&str> {
        self.fixtures.values().map(|e| e.fixture.name()).collect()
    }
}

/// A simple fixture that executes closures for setup and teardown.
///
/// Useful for quick fixture creation without implementing the trait.
pub struct SimpleFixture {
    name: String,
    priority: i32,
    setup_fn: Option<Box<dyn FnMut() -> SondarResult<()> + Send + Sync>>,
    teardown_fn: Option<Box<dyn FnMut() -> SondarResult<()> + Send + Sync>>,
    is_setup: bool,
}

impl std::fmt::Debug for SimpleFixture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleFixture")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("is_setup", &self.is_setup)
            .finish()
    }
}

impl SimpleFixture {
    /// Create a new simple fixture with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            setup_fn: None,
            teardown_fn: None,
            is_setup: false,
        }
    }

    /// Set the setup function.
    #[must_use]
    pub fn with_setup<F>(mut self, f: F) -> Self
    where
        F: FnMut() -> SondarResult<()> + Send + Sync + 'static,
    {
        self.setup_fn = Some(Box::new(f));
        self
    }

    /// Set the teardown function.
    #[must_use]
    pub fn with_teardown<F>(mut self, f: F) -> Self
    where
        F: FnMut() -> SondarResult<()> + Send + Sync + 'static,
    {
        self.teardown_fn = Some(Box::new(f));
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl Fixture for SimpleFixture {
    fn setup(&mut self) -> SondarResult<()> {
        if let Some(f) = &mut self.setup_fn {
            f()?;
        }
        self.is_setup = true;
        Ok(())
    }

    fn teardown(&mut self) -> SondarResult<()> {
        if let Some(f) = &mut self.teardown_fn {
            f()?;
        }
        self.is_setup = false;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

/// Builder for assembling a fixture manager.
#[derive(Debug)]
pub struct FixtureBuilder {
    manager: FixtureManager,
}

impl Default for FixtureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureBuilder {
    /// Create a new fixture builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            manager: FixtureManager::new(),
        }
    }

    /// Add a fixture to the builder.
    #[must_use]
    pub fn with_fixture<F: Fixture + 'static>(mut self, fixture: F) -> Self {
        self.manager.register(fixture);
        self
    }

    /// Build the fixture manager.
    #[must_use]
    pub fn build(self) -> FixtureManager {
        self.manager
    }

    /// Build and set up all fixtures.
    pub fn build_and_setup(mut self) -> SondarResult<FixtureManager> {
        self.manager.setup_all()?;
        Ok(self.manager)
    }
}

/// A fixture scope for automatic teardown using RAII.
///
/// When the scope is dropped, all fixtures are torn down automatically.
pub struct FixtureScope {
    manager: FixtureManager,
}

impl FixtureScope {
    /// Create a new fixture scope from a manager.
    ///
    /// The manager should already have fixtures set up.
    #[must_use]
    pub fn new(manager: FixtureManager) -> Self {
        Self { manager }
    }

    /// The wrapped manager.
    #[must_use]
    pub fn manager(&self) -> &FixtureManager {
        &self.manager
    }
}

impl Drop for FixtureScope {
    fn drop(&mut self) {
        // Best effort teardown - ignore errors during drop
        let _ = self.manager.teardown_all();
    }
}

impl std::fmt::Debug for FixtureScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureScope")
            .field("manager", &self.manager)
            .finish()
    }
}
