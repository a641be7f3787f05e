//! Colección en memoria
//!
//! Lista ordenada por inserción con un contador de ids monotónico: un id
//! eliminado nunca se reutiliza.

/// Registro identificado por un id numérico
pub trait Record: Clone {
    fn id(&self) -> u64;
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    last_id: u64,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            last_id: 0,
        }
    }

    /// Crear una colección a partir de registros existentes (seed)
    pub fn from_records(items: Vec<T>) -> Self {
        let last_id = items.iter().map(Record::id).max().unwrap_or(0);
        Self { items, last_id }
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    /// Insertar un nuevo registro; `build` recibe el id asignado
    pub fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> T {
        self.last_id += 1;
        let record = build(self.last_id);
        self.items.push(record.clone());
        record
    }

    /// Reemplazar el registro con el mismo id. Devuelve el anterior.
    pub fn replace(&mut self, record: T) -> Option<T> {
        let slot = self.items.iter_mut().find(|item| item.id() == record.id())?;
        Some(std::mem::replace(slot, record))
    }

    /// Eliminar exactamente el registro con ese id
    pub fn remove(&mut self, id: u64) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Eliminar el registro con ese id sólo si además cumple `matches`
    pub fn remove_where(&mut self, id: u64, matches: impl Fn(&T) -> bool) -> Option<T> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id && matches(item))?;
        Some(self.items.remove(index))
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }
}
