// Layout service - Single owner of the dashboard layout and its persistence
use crate::application::key_value_store::{KeyValueStore, SECTION_ORDER_KEY, SECTION_VISIBILITY_KEY};
use crate::domain::component::ComponentLayout;
use crate::domain::dashboard::Dashboard;
use crate::domain::error::{LayoutError, Result};
use crate::domain::layout::LayoutState;
use crate::domain::section::SectionRegistry;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::{Mutex, MutexGuard, watch};
use tracing::{debug, info};

/// Full layout as seen by a client: sections plus widget placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    #[serde(flatten)]
    pub layout: LayoutState,
    pub components: ComponentLayout,
}

struct LayoutInner {
    state: LayoutState,
    components: ComponentLayout,
}

impl LayoutInner {
    fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            layout: self.state.clone(),
            components: self.components.clone(),
        }
    }
}

pub struct LayoutService {
    store: Arc<dyn KeyValueStore>,
    registry: Arc<SectionRegistry>,
    inner: Mutex<LayoutInner>,
    updates: StdMutex<Option<watch::Sender<LayoutSnapshot>>>,
    disposed: AtomicBool,
}

impl LayoutService {
    /// Load persisted order and visibility, falling back to registry
    /// defaults for whichever key is absent. Malformed values fail the load.
    pub async fn init(store: Arc<dyn KeyValueStore>, registry: Arc<SectionRegistry>) -> Result<Self> {
        let mut state = LayoutState::from_registry(&registry);
        if let Some(order) = load_json(store.as_ref(), SECTION_ORDER_KEY).await? {
            state.section_order = order;
        }
        if let Some(visibility) = load_json(store.as_ref(), SECTION_VISIBILITY_KEY).await? {
            state.section_visibility = visibility;
        }

        let inner = LayoutInner {
            state,
            components: ComponentLayout::from_defaults(registry.default_components()),
        };

        info!(
            sections = inner.state.section_order.len(),
            components = inner.components.total_count(),
            "layout service initialized"
        );

        let (updates, _) = watch::channel(inner.snapshot());

        Ok(Self {
            store,
            registry,
            inner: Mutex::new(inner),
            updates: StdMutex::new(Some(updates)),
            disposed: AtomicBool::new(false),
        })
    }

    /// Stop accepting mutations and close every subscription. Reads keep
    /// working.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Ok(mut updates) = self.updates.lock() {
            updates.take();
        }
        info!("layout service disposed");
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// `None` once the service has been disposed.
    pub fn subscribe(&self) -> Option<watch::Receiver<LayoutSnapshot>> {
        let updates = self.updates.lock().ok()?;
        updates.as_ref().map(watch::Sender::subscribe)
    }

    pub async fn snapshot(&self) -> LayoutSnapshot {
        self.inner.lock().await.snapshot()
    }

    pub async fn dashboard(&self) -> Dashboard {
        let inner = self.inner.lock().await;
        Dashboard::render(&inner.state, &inner.components, &self.registry)
    }

    pub async fn is_drag_mode_enabled(&self) -> bool {
        self.inner.lock().await.state.drag_mode_enabled
    }

    pub async fn reorder_sections(&self, start_index: usize, end_index: usize) -> Result<LayoutSnapshot> {
        let mut inner = self.lock_live().await?;
        inner.state.reorder_sections(start_index, end_index)?;
        debug!(start_index, end_index, "sections reordered");

        let persisted = self.persist(&inner.state).await;
        let snapshot = self.publish(&inner);
        persisted.map(|()| snapshot)
    }

    pub async fn toggle_section_visibility(&self, id: &str) -> Result<LayoutSnapshot> {
        let mut inner = self.lock_live().await?;
        let visible = inner.state.toggle_section_visibility(id);
        debug!(section = id, visible, "section visibility toggled");

        let persisted = self.persist(&inner.state).await;
        let snapshot = self.publish(&inner);
        persisted.map(|()| snapshot)
    }

    pub async fn set_drag_mode(&self, enabled: bool) -> Result<LayoutSnapshot> {
        let mut inner = self.lock_live().await?;
        inner.state.drag_mode_enabled = enabled;
        debug!(enabled, "drag mode set");
        Ok(self.publish(&inner))
    }

    pub async fn toggle_drag_mode(&self) -> Result<LayoutSnapshot> {
        let mut inner = self.lock_live().await?;
        inner.state.drag_mode_enabled = !inner.state.drag_mode_enabled;
        debug!(enabled = inner.state.drag_mode_enabled, "drag mode toggled");
        Ok(self.publish(&inner))
    }

    /// Back to registry defaults. Both persisted keys are removed rather than
    /// rewritten with the defaults.
    pub async fn reset_to_default(&self) -> Result<LayoutSnapshot> {
        let mut inner = self.lock_live().await?;
        inner.state.reset(&self.registry);
        inner.components = ComponentLayout::from_defaults(self.registry.default_components());
        info!("layout reset to defaults");

        let cleared = self.clear_persisted().await;
        let snapshot = self.publish(&inner);
        cleared.map(|()| snapshot)
    }

    /// Component placement lives in memory only.
    pub async fn move_component(
        &self,
        component_id: &str,
        from_section: &str,
        to_section: &str,
        new_index: usize,
    ) -> Result<LayoutSnapshot> {
        let mut inner = self.lock_live().await?;
        inner
            .components
            .move_component(component_id, from_section, to_section, new_index);
        debug!(
            component = component_id,
            from = from_section,
            to = to_section,
            index = new_index,
            "component moved"
        );
        Ok(self.publish(&inner))
    }

    async fn lock_live(&self) -> Result<MutexGuard<'_, LayoutInner>> {
        let guard = self.inner.lock().await;
        if self.disposed.load(Ordering::Acquire) {
            return Err(LayoutError::Disposed);
        }
        Ok(guard)
    }

    async fn persist(&self, state: &LayoutState) -> Result<()> {
        let order = serde_json::to_string(&state.section_order).context("encoding section order")?;
        let visibility =
            serde_json::to_string(&state.section_visibility).context("encoding section visibility")?;

        self.store
            .set(SECTION_ORDER_KEY, &order)
            .await
            .with_context(|| format!("writing {}", SECTION_ORDER_KEY))?;
        self.store
            .set(SECTION_VISIBILITY_KEY, &visibility)
            .await
            .with_context(|| format!("writing {}", SECTION_VISIBILITY_KEY))?;
        Ok(())
    }

    async fn clear_persisted(&self) -> Result<()> {
        self.store
            .remove(SECTION_ORDER_KEY)
            .await
            .with_context(|| format!("removing {}", SECTION_ORDER_KEY))?;
        self.store
            .remove(SECTION_VISIBILITY_KEY)
            .await
            .with_context(|| format!("removing {}", SECTION_VISIBILITY_KEY))?;
        Ok(())
    }

    /// Runs after every in-memory change, including ones whose store call
    /// failed, so subscribers never lag behind `snapshot()`.
    fn publish(&self, inner: &LayoutInner) -> LayoutSnapshot {
        let snapshot = inner.snapshot();
        if let Ok(updates) = self.updates.lock() {
            if let Some(tx) = updates.as_ref() {
                tx.send_replace(snapshot.clone());
            }
        }
        snapshot
    }
}

async fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store
        .get(key)
        .await
        .with_context(|| format!("reading {}", key))?
    else {
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| LayoutError::CorruptState {
            key: key.to_string(),
            source,
        })
}
