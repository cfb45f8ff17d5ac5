#![cfg(test)]

// Property tests for WordTable kept inside the crate so they can use the
// probe internals directly.

use crate::probe::{word_hash, ProbeSeq, Strategy as Probing};
use crate::table::{InsertError, WordTable};
use hashbrown::HashMap;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(usize),
    Search(usize),
    Miss(String),
    Dump,
}

fn arb_strategy() -> impl Strategy<Value = Probing> {
    prop_oneof![Just(Probing::LinearProbing), Just(Probing::DoubleHashing)]
}

// Pool-indexed operations so shrinking moves toward earlier keys and
// shorter op lists. Capacities are prime so double hashing reaches every slot.
fn arb_scenario() -> impl Strategy<Value = (usize, Probing, Vec<String>, Vec<Op>)> {
    let capacity = proptest::sample::select(vec![1usize, 2, 3, 5, 7, 11, 13, 31]);
    let pool = proptest::collection::vec("[a-z]{1,4}", 1..=24);
    (capacity, arb_strategy(), pool).prop_flat_map(|(capacity, strategy, pool)| {
        let idx = 0..pool.len();
        let op = prop_oneof![
            4 => idx.clone().prop_map(Op::Insert),
            1 => idx.prop_map(Op::Search),
            1 => "[0-9]{1,3}".prop_map(Op::Miss),
            1 => Just(Op::Dump),
        ];
        proptest::collection::vec(op, 1..80)
            .prop_map(move |ops| (capacity, strategy, pool.clone(), ops))
    })
}

// Every stored key sits exactly `collisions` steps along its own probe
// sequence, and every earlier position holds some other key.
fn assert_reachable(t: &WordTable) -> Result<(), TestCaseError> {
    for (index, slot) in t.slots() {
        let Some(e) = slot else { continue };
        let walk: Vec<usize> = ProbeSeq::new(&t.strategy(), word_hash(e.key), t.capacity())
            .map(|(_, i)| i)
            .collect();
        prop_assert_eq!(walk[e.collisions], index);
        for &before in &walk[..e.collisions] {
            let other = t.slot(before).flatten();
            prop_assert!(other.is_some_and(|o| o.key != e.key));
        }
    }
    Ok(())
}

// Property: state-machine equivalence against a HashMap of counts.
// Invariants exercised across random operation sequences:
// - insert returns the model count; TableFull only for a new key when full.
// - A key's slot never changes once placed.
// - `collisions().len() == len()` == number of occupied slots.
// - Misses never mutate; the dump is stable between inserts.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_word_table_state_machine((capacity, strategy, pool, ops) in arb_scenario()) {
        let mut sut = WordTable::new(capacity, strategy);
        let mut model: HashMap<String, u64> = HashMap::new();
        let mut placed: HashMap<String, usize> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(i) => {
                    let key = &pool[i];
                    let existing = model.get(key).copied();
                    match sut.insert(key) {
                        Ok(freq) => {
                            let expected = existing.unwrap_or(0) + 1;
                            prop_assert_eq!(freq, expected);
                            model.insert(key.clone(), expected);
                            let slot = sut.find(key).unwrap();
                            let first = *placed.entry(key.clone()).or_insert(slot);
                            prop_assert_eq!(first, slot, "slot moved");
                        }
                        Err(InsertError::TableFull { capacity: c }) => {
                            prop_assert_eq!(c, capacity);
                            prop_assert!(existing.is_none(), "existing key rejected");
                            prop_assert_eq!(model.len(), capacity, "rejected with free slots");
                        }
                    }
                }
                Op::Search(i) => {
                    let key = &pool[i];
                    prop_assert_eq!(sut.search(key), model.get(key).copied());
                    prop_assert_eq!(sut.contains(key), model.contains_key(key));
                }
                Op::Miss(key) => {
                    let before = sut.collisions().to_vec();
                    prop_assert_eq!(sut.search(&key), None);
                    prop_assert_eq!(sut.collisions(), &before[..]);
                }
                Op::Dump => {
                    let a: Vec<_> = sut.slots().collect();
                    let b: Vec<_> = sut.slots().collect();
                    prop_assert_eq!(a, b);
                }
            }

            let occupied = sut.slots().filter(|(_, s)| s.is_some()).count();
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.collisions().len(), sut.len());
            prop_assert_eq!(occupied, sut.len());
        }

        assert_reachable(&sut)?;
        let listed: HashMap<String, u64> = sut.iter().map(|(k, f)| (k.to_string(), f)).collect();
        prop_assert_eq!(listed, model);
    }
}
