use crate::error::{AppError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// Thread-safe service container keyed by concrete type.
#[derive(Clone)]
pub struct Container {
    services: DashMap<TypeId, ServiceEntry>,
}

#[derive(Clone)]
struct ServiceEntry {
    instance: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Container {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    /// Register `instance`, replacing any earlier instance of the same type.
    pub fn register<T: 'static + Send + Sync>(&mut self, instance: T) -> &mut Self {
        let entry = ServiceEntry {
            instance: Arc::new(instance),
            type_name: std::any::type_name::<T>(),
        };
        if let Some(previous) = self.services.insert(TypeId::of::<T>(), entry) {
            tracing::debug!("Replaced registered service {}", previous.type_name);
        }
        self
    }

    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let entry = self
            .services
            .get(&TypeId::of::<T>())
            .ok_or_else(|| AppError::DependencyNotFound {
                type_name: std::any::type_name::<T>().to_string(),
            })?;
        entry
            .instance
            .clone()
            .downcast::<T>()
            .map_err(|_| AppError::Internal(format!("Failed to downcast {}", entry.type_name)))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestService {
        value: i32,
    }

    #[test]
    fn test_register_and_resolve() {
        let mut container = Container::new();
        container.register(TestService { value: 42 });
        let service = container.resolve::<TestService>().unwrap();
        assert_eq!(service.value, 42);
        assert!(!container.is_empty());
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_register_replaces_same_type() {
        let mut container = Container::new();
        container
            .register(TestService { value: 1 })
            .register(TestService { value: 2 });
        assert_eq!(container.len(), 1);
        assert_eq!(container.resolve::<TestService>().unwrap().value, 2);
    }

    #[test]
    fn test_resolve_missing() {
        let container = Container::new();
        assert!(container.is_empty());
        let err = container.resolve::<TestService>().unwrap_err();
        match err {
            AppError::DependencyNotFound { type_name } => {
                assert!(type_name.ends_with("TestService"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
