// Property tests for HashTable kept inside the crate so they can check
// bucket layout directly.

use crate::error::{InsertError, Rejected};
use crate::hash_table::{bucket_index, HashTable, Insertion};
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations: short keys over a small alphabet collide often
// under the byte-sum hash, which keeps the chains busy.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, u16),
    Delete(usize),
    Search(usize),
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<Op>)> {
    (
        1usize..=6,
        proptest::collection::vec("[a-d]{0,4}", 1..=10),
    )
        .prop_flat_map(|(capacity, pool)| {
            let idx = 0..pool.len();
            let op = prop_oneof![
                4 => (idx.clone(), any::<u16>()).prop_map(|(i, v)| Op::Insert(i, v)),
                2 => idx.clone().prop_map(Op::Delete),
                2 => idx.prop_map(Op::Search),
                1 => Just(Op::Clear),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (capacity, pool.clone(), ops))
        })
}

fn check_layout(t: &HashTable) -> Result<(), TestCaseError> {
    let mut stored = 0;
    for index in 0..t.capacity() {
        let slot = t.slot(index);
        let chain = t.chain(index);
        if slot.is_none() {
            prop_assert!(chain.is_none(), "chain without slot at {}", index);
        }
        if let Some(c) = chain {
            prop_assert!(!c.is_empty(), "empty chain kept at {}", index);
        }
        for rec in slot.into_iter().chain(chain.into_iter().flatten()) {
            prop_assert_eq!(bucket_index(rec.key(), t.capacity()), index);
            stored += 1;
        }
    }
    prop_assert_eq!(stored, t.len());
    prop_assert!(t.len() <= t.capacity());
    Ok(())
}

// Property: model equivalence against std::collections::HashMap.
// - Inserts beyond capacity are rejected, overwrites included, with no
//   state change.
// - Search and delete agree with the model; delete reports the removed value.
// - After every step the layout holds: records sit in their hash bucket,
//   no chain without a slot, no empty chain, count equals stored records.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_model_equivalence((capacity, pool, ops) in arb_scenario()) {
        let mut sut = HashTable::new(capacity).unwrap();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(i, v) => {
                    let k = &pool[i];
                    let v = v.to_string();
                    let full = model.len() == capacity;
                    match sut.try_insert(k, &v) {
                        Ok(Insertion::Added) => {
                            prop_assert!(!full);
                            prop_assert!(model.insert(k.clone(), v).is_none());
                        }
                        Ok(Insertion::Updated) => {
                            prop_assert!(!full);
                            prop_assert!(model.insert(k.clone(), v).is_some());
                        }
                        Err(InsertError::Rejected(Rejected::TableFull)) => {
                            prop_assert!(full, "rejected while not full");
                        }
                        Err(e) => prop_assert!(false, "unexpected error: {:?}", e),
                    }
                }
                Op::Delete(i) => {
                    let k = &pool[i];
                    match (sut.try_delete(k), model.remove(k)) {
                        (Ok(got), Some(want)) => prop_assert_eq!(got, want),
                        (Err(Rejected::NotFound), None) => {}
                        (got, want) => prop_assert!(false, "delete {:?}: {:?} vs {:?}", k, got, want),
                    }
                }
                Op::Search(i) => {
                    let k = &pool[i];
                    prop_assert_eq!(sut.search(k), model.get(k).map(String::as_str));
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(sut.len(), model.len());
            check_layout(&sut)?;
        }

        for (k, v) in &model {
            prop_assert_eq!(sut.search(k), Some(v.as_str()));
        }
    }
}
