//! A panicking handler propagates out of the mutation and stops the rest of
//! that emission, but leaves the collection and its listeners usable.

use observa_reactive::{ChangeKind, ObservableCollection};
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

#[test]
fn test_panicking_handler_aborts_remaining_handlers() {
    let mut collection = ObservableCollection::with_initial(vec![1]);

    let first = Rc::new(Cell::new(0));
    let last = Rc::new(Cell::new(0));
    let should_panic = Rc::new(Cell::new(true));

    let first_clone = first.clone();
    let _sub1 = collection.subscribe_to_changes(move |_| first_clone.set(first_clone.get() + 1));
    let should_panic_clone = should_panic.clone();
    let _sub2 = collection.subscribe_to_changes(move |_| {
        if should_panic_clone.get() {
            panic!("handler failure");
        }
    });
    let last_clone = last.clone();
    let _sub3 = collection.subscribe_to_changes(move |_| last_clone.set(last_clone.get() + 1));

    let result = panic::catch_unwind(AssertUnwindSafe(|| collection.add(2)));
    assert!(result.is_err());

    // The mutation was applied before notification.
    assert_eq!(collection.to_snapshot(), vec![1, 2]);
    assert_eq!(first.get(), 1);
    assert_eq!(last.get(), 0);
    assert_eq!(collection.subscription_count(), 3);

    // Later emissions reach every handler again.
    should_panic.set(false);
    collection.add(3);
    assert_eq!(first.get(), 2);
    assert_eq!(last.get(), 1);
}

#[test]
fn test_collection_usable_after_handler_panic() {
    let mut collection = ObservableCollection::new();

    let kinds = Rc::new(RefCell::new(Vec::new()));
    let kinds_clone = kinds.clone();
    let sub = collection.subscribe_to_changes(|_| panic!("boom"));
    let _recorder = collection.subscribe_to_changes(move |e| kinds_clone.borrow_mut().push(e.kind));

    let result = panic::catch_unwind(AssertUnwindSafe(|| collection.add("a")));
    assert!(result.is_err());
    assert!(kinds.borrow().is_empty());

    sub.unsubscribe();
    collection.clear();

    assert_eq!(*kinds.borrow(), vec![ChangeKind::Clear]);
    assert!(collection.is_empty());
}
