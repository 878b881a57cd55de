//! Слоты для живых объектов страницы: смонтированных узлов и таймеров.
//!
//! Объект в слоте живет, пока лежит в слоте. Снятие возвращает его
//! вызывающему, и тот уничтожает его уже после того, как отпустил
//! `RefCell` с состоянием. Повторное снятие безопасно и ничего не делает.

use std::any::Any;
use std::collections::HashMap;
use std::hash::Hash;

/// Одиночный слот: создать, если пуст; снять, если занят
#[derive(Debug)]
pub struct Slot<H> {
    value: Option<H>,
}

impl<H> Default for Slot<H> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<H> Slot<H> {
    /// Кладет значение из `create`, только если слот пуст.
    /// Возвращает `true`, если значение было создано.
    pub fn fill_if_empty(&mut self, create: impl FnOnce() -> Option<H>) -> bool {
        if self.value.is_some() {
            return false;
        }
        self.value = create();
        self.value.is_some()
    }

    pub fn take(&mut self) -> Option<H> {
        self.value.take()
    }
}

/// Набор слотов по ключу; новое значение вытесняет старое
#[derive(Debug)]
pub struct KeyedSlots<K, H> {
    values: HashMap<K, H>,
}

impl<K, H> Default for KeyedSlots<K, H> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, H> KeyedSlots<K, H> {
    /// Кладет значение и возвращает вытесненное
    pub fn replace(&mut self, key: K, value: H) -> Option<H> {
        self.values.insert(key, value)
    }

    pub fn remove(&mut self, key: &K) -> Option<H> {
        self.values.remove(key)
    }
}

/// Смонтированное представление любого типа; снимается со страницы при drop
pub struct Mounted(#[allow(dead_code)] Box<dyn Any>);

impl Mounted {
    pub fn new<T: 'static>(handle: T) -> Self {
        Mounted(Box::new(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Считает уничтожения, как это делает снятие узла или отмена таймера
    struct Probe(Rc<Cell<u32>>);

    impl Drop for Probe {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_slot_creates_once() {
        let mut slot: Slot<u32> = Slot::default();
        let mut calls = 0;
        assert!(slot.fill_if_empty(|| {
            calls += 1;
            Some(1)
        }));
        assert!(!slot.fill_if_empty(|| {
            calls += 1;
            Some(2)
        }));
        assert_eq!(calls, 1);
        assert_eq!(slot.take(), Some(1));
    }

    #[test]
    fn test_slot_failed_create_leaves_empty() {
        let mut slot: Slot<u32> = Slot::default();
        assert!(!slot.fill_if_empty(|| None));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_slot_take_is_idempotent() {
        let mut slot: Slot<u32> = Slot::default();
        assert_eq!(slot.take(), None);
        slot.fill_if_empty(|| Some(5));
        assert_eq!(slot.take(), Some(5));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_replace_drops_previous_value() {
        let drops = Rc::new(Cell::new(0));
        let mut slots: KeyedSlots<String, Probe> = KeyedSlots::default();

        drop(slots.replace("orders".to_string(), Probe(drops.clone())));
        assert_eq!(drops.get(), 0);

        drop(slots.replace("orders".to_string(), Probe(drops.clone())));
        assert_eq!(drops.get(), 1);

        drop(slots.replace("users".to_string(), Probe(drops.clone())));
        assert_eq!(drops.get(), 1);
        assert_eq!(slots.values.len(), 2);
    }

    #[test]
    fn test_remove_twice() {
        let drops = Rc::new(Cell::new(0));
        let mut slots: KeyedSlots<String, Probe> = KeyedSlots::default();
        slots.replace("alert-1".to_string(), Probe(drops.clone()));

        drop(slots.remove(&"alert-1".to_string()));
        drop(slots.remove(&"alert-1".to_string()));
        assert_eq!(drops.get(), 1);
        assert!(slots.values.is_empty());
    }

    #[test]
    fn test_mounted_drops_inner_handle() {
        let drops = Rc::new(Cell::new(0));
        let mounted = Mounted::new(Probe(drops.clone()));
        assert_eq!(drops.get(), 0);
        drop(mounted);
        assert_eq!(drops.get(), 1);
    }
}
