//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

//! Storage for a single alternative.

/// Holds one alternative.
///
/// A cell only lives inside one variant of a storage enum, so dropping the enum drops the
/// live cell and nothing else. References are stored as the references themselves: a cell
/// of `&T` is pointer-sized, has no drop glue, and a cell of a zero-sized type is empty.
#[repr(transparent)]
pub struct Cell<T> {
    value: T,
}

impl<T> Cell<T> {
    /// Constructs the cell's content.
    pub const fn new(value: T) -> Self {
        Self { value }
    }
    pub fn read(&self) -> &T {
        &self.value
    }
    pub fn read_mut(&mut self) -> &mut T {
        &mut self.value
    }
    /// Moves the content out.
    pub fn into_inner(self) -> T {
        self.value
    }
    /// Assigns over the content, dropping the previous value.
    pub fn assign(&mut self, value: T) {
        self.value = value;
    }
}

impl<T: Clone> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self::new(self.read().clone())
    }
    fn clone_from(&mut self, source: &Self) {
        self.read_mut().clone_from(source.read())
    }
}
impl<T: Copy> Copy for Cell<T> {}
impl<T: PartialEq> PartialEq for Cell<T> {
    fn eq(&self, other: &Self) -> bool {
        self.read() == other.read()
    }
}
impl<T: Eq> Eq for Cell<T> {}
impl<T: PartialOrd> PartialOrd for Cell<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.read().partial_cmp(other.read())
    }
}
impl<T: Ord> Ord for Cell<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.read().cmp(other.read())
    }
}
impl<T: core::hash::Hash> core::hash::Hash for Cell<T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.read().hash(state)
    }
}
impl<T: core::fmt::Debug> core::fmt::Debug for Cell<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.read().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn cells_own_their_content() {
        let counter = std::rc::Rc::new(());
        let cell = Cell::new(counter.clone());
        assert_eq!(std::rc::Rc::strong_count(&counter), 2);
        drop(Cell::new(counter.clone()));
        assert_eq!(std::rc::Rc::strong_count(&counter), 2);
        drop(cell);
        assert_eq!(std::rc::Rc::strong_count(&counter), 1);
    }

    #[test]
    fn referents_may_be_declared_later() {
        let mut cell = Cell::new(&0u8);
        let late = 7u8;
        cell.assign(&late);
        assert_eq!(**cell.read(), 7);
    }

    #[test]
    fn assignment_drops_the_previous_value() {
        let a = std::rc::Rc::new(());
        let b = std::rc::Rc::new(());
        let mut cell = Cell::new(a.clone());
        cell.assign(b.clone());
        assert_eq!(std::rc::Rc::strong_count(&a), 1);
        assert_eq!(std::rc::Rc::strong_count(&b), 2);
        assert!(std::rc::Rc::ptr_eq(&cell.into_inner(), &b));
    }

    #[test]
    fn cells_are_transparent() {
        assert_eq!(core::mem::size_of::<Cell<&u8>>(), core::mem::size_of::<&u8>());
        assert_eq!(core::mem::size_of::<Cell<()>>(), 0);
        assert_eq!(
            core::mem::size_of::<Option<Cell<&u8>>>(),
            core::mem::size_of::<&u8>()
        );
    }
}
