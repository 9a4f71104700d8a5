//! The skiplist has no internal synchronization, these tests share it behind a lock.

use std::{sync::Arc, thread};

use parking_lot::{Mutex, RwLock};
use skipindex::SkipList;

/// Only used for testing
fn key(i: usize) -> String {
  format!("{:05}", i)
}

#[test]
fn concurrent_writers_behind_mutex() {
  const THREADS: usize = 8;
  const N: usize = 500;

  let l = Arc::new(Mutex::new(SkipList::<String, usize>::new()));
  let handles: Vec<_> = (0..THREADS)
    .map(|t| {
      let l = l.clone();
      thread::spawn(move || {
        for i in 0..N {
          // every thread writes the same keys, duplicates must all survive
          l.lock().add(key(i), t);
        }
      })
    })
    .collect();

  for h in handles {
    h.join().unwrap();
  }

  let l = l.lock();
  assert_eq!(l.len(), THREADS * N);
  for i in 0..N {
    assert_eq!(l.count(&key(i)), THREADS);
  }
  l.debugger().verify().unwrap();
}

#[test]
fn readers_and_writer_behind_rwlock() {
  const N: usize = 1000;

  let l = Arc::new(RwLock::new(SkipList::<usize, usize>::new()));
  {
    let mut l = l.write();
    for i in 0..N {
      l.add(i, i);
    }
  }

  let writer = {
    let l = l.clone();
    thread::spawn(move || {
      for i in (0..N).step_by(2) {
        let mut l = l.write();
        let ptr = l.get(&i).unwrap().ptr();
        l.remove(ptr).unwrap();
      }
    })
  };

  let readers: Vec<_> = (0..4)
    .map(|_| {
      let l = l.clone();
      thread::spawn(move || {
        for _ in 0..50 {
          let l = l.read();
          // odd keys are never touched
          assert_eq!(l.range(&1, &1).count(), 1);
          let keys: Vec<_> = l.iter().map(|ent| *ent.key()).collect();
          assert!(keys.windows(2).all(|w| w[0] < w[1]));
        }
      })
    })
    .collect();

  writer.join().unwrap();
  for r in readers {
    r.join().unwrap();
  }

  let l = l.read();
  assert_eq!(l.len(), N / 2);
  assert!(l.iter().all(|ent| ent.key() % 2 == 1));
}
