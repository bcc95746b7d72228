use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use once_cell::sync::Lazy;

use super::Modulus;
use crate::bigint::BigInt;
use crate::utils::errors::FieldError;

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(0);

static GLOBAL_CONTEXT: Lazy<ModulusContext> = Lazy::new(ModulusContext::new);

/// Holder of the active modulus.
///
/// The slot moves `Uninitialized -> Active` on the first successful
/// [`install`](Self::install) and stays `Active` afterwards; there is no
/// teardown. Field elements never store the modulus they were built under,
/// so replacing the active modulus silently changes how existing elements are
/// combined from then on.
///
/// Individual calls are internally synchronized, but a
/// save -> install -> operate -> restore sequence is not atomic. Callers that
/// switch moduli from several threads must hold [`lock`](Self::lock) for the
/// whole sequence.
#[derive(Debug)]
pub struct ModulusContext {
    id: u64,
    active: RwLock<Option<Arc<Modulus>>>,
    section: Mutex<()>,
}

/// Opaque token capturing a modulus of one particular context.
///
/// Snapshots never expire; they are only rejected by a context other than
/// the one that produced them.
#[derive(Clone, Debug)]
pub struct Snapshot {
    context_id: u64,
    modulus: Arc<Modulus>,
}

/// Held across a multi-step modulus switch; see [`ModulusContext::lock`].
pub type ContextLock<'a> = MutexGuard<'a, ()>;

/// Restores the previously active modulus on drop.
///
/// If no modulus was active when the guard was created, the guard's modulus
/// stays active after the drop.
#[must_use = "the previous modulus is restored as soon as the guard is dropped"]
pub struct ModulusGuard<'a> {
    context: &'a ModulusContext,
    previous: Option<Snapshot>,
}

impl Drop for ModulusGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            tracing::debug!(
                context = self.context.id,
                modulus_bits = previous.modulus.num_bits(),
                "restoring modulus on guard drop"
            );
            self.context.set_active(previous.modulus);
        }
    }
}

impl Default for ModulusContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ModulusContext {
    /// A fresh, uninitialized context independent of every other context.
    pub fn new() -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            active: RwLock::new(None),
            section: Mutex::new(()),
        }
    }

    /// The process-wide context behind the ambient field-element API.
    pub fn global() -> &'static ModulusContext {
        &GLOBAL_CONTEXT
    }

    // The slot only ever holds a fully constructed value, so a poisoned lock
    // carries no torn state.
    fn set_active(&self, modulus: Arc<Modulus>) {
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = Some(modulus);
    }

    pub fn is_initialized(&self) -> bool {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replaces the active modulus. Calls do not stack: a later `install`
    /// simply overwrites an earlier one.
    #[tracing::instrument(skip_all, fields(context = self.id, modulus_bits = modulus.num_bits()))]
    pub fn install(&self, modulus: BigInt) -> Result<(), FieldError> {
        let modulus = Modulus::new(modulus)?;
        self.set_active(Arc::new(modulus));
        tracing::debug!("installed modulus");
        Ok(())
    }

    pub fn active(&self) -> Result<Arc<Modulus>, FieldError> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(FieldError::UninitializedModulus)
    }

    pub fn current(&self) -> Result<BigInt, FieldError> {
        Ok(self.active()?.value().clone())
    }

    pub fn modulus_string(&self) -> Result<String, FieldError> {
        Ok(self.current()?.to_decimal_string())
    }

    /// Captures the active modulus without changing it.
    pub fn save(&self) -> Result<Snapshot, FieldError> {
        let modulus = self.active()?;
        tracing::debug!(context = self.id, modulus_bits = modulus.num_bits(), "saved modulus");
        Ok(Snapshot {
            context_id: self.id,
            modulus,
        })
    }

    #[tracing::instrument(skip_all, fields(context = self.id))]
    pub fn restore(&self, snapshot: &Snapshot) -> Result<(), FieldError> {
        if snapshot.context_id != self.id {
            tracing::warn!(
                snapshot_context = snapshot.context_id,
                "rejecting snapshot taken from another context"
            );
            return Err(FieldError::InvalidSnapshot);
        }
        tracing::debug!(modulus_bits = snapshot.modulus.num_bits(), "restored modulus");
        self.set_active(Arc::clone(&snapshot.modulus));
        Ok(())
    }

    /// Installs `modulus` and returns a guard that puts the previous modulus
    /// back when dropped.
    #[tracing::instrument(skip_all, fields(context = self.id, modulus_bits = modulus.num_bits()))]
    pub fn with_modulus(&self, modulus: BigInt) -> Result<ModulusGuard<'_>, FieldError> {
        let modulus = Arc::new(Modulus::new(modulus)?);
        let previous = self.save().ok();
        self.set_active(modulus);
        Ok(ModulusGuard {
            context: self,
            previous,
        })
    }

    /// Serializes multi-step modulus switches between threads. The context's
    /// own methods never take this lock, so they can be called while holding it.
    pub fn lock(&self) -> ContextLock<'_> {
        self.section.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Back to `Uninitialized`.
    #[cfg(test)]
    pub(crate) fn reset(&self) {
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
