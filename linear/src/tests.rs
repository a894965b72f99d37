use crate::doubly_linked_list::tests::assert_links;
use crate::{CollectionError, DoublyLinkedList, DynamicArray, SinglyLinkedList};
use collection_traits::{EndAccess, HasLength, Iterable, LinearSearch};
use itertools::Itertools;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use std::collections::VecDeque;

#[derive(Debug, Copy, Clone)]
enum Op {
    AddFirst(Option<u8>),
    AddLast(Option<u8>),
    RemoveFirst,
    RemoveLast,
    Clear,
}

fn random_ops(seed: u64, count: usize) -> Vec<Op> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let value = rng.gen_bool(0.8).then(|| rng.gen_range(0..10));
            match rng.gen_range(0..20) {
                0..=5 => Op::AddFirst(value),
                6..=11 => Op::AddLast(value),
                12..=15 => Op::RemoveFirst,
                16..=18 => Op::RemoveLast,
                _ => Op::Clear,
            }
        })
        .collect()
}

/// Applies `ops` to `list` and to a `VecDeque` model, comparing them after
/// every step. `check` runs extra structural assertions on the list.
fn run_model<L>(list: &mut L, ops: &[Op], check: impl Fn(&L))
where
    L: EndAccess<Item = u8, Error = CollectionError>,
    for<'a> &'a L: IntoIterator<Item = Option<&'a u8>>,
{
    let mut model = VecDeque::<Option<u8>>::new();
    let mut adds = 0usize;
    let mut removes = 0usize;

    for op in ops {
        match *op {
            Op::AddFirst(value) => {
                list.add_first(value);
                model.push_front(value);
                adds += 1;
            }
            Op::AddLast(value) => {
                list.add_last(value);
                model.push_back(value);
                adds += 1;
            }
            Op::RemoveFirst => {
                let expected = model.pop_front().ok_or(CollectionError::EmptyCollection);
                let actual = list.remove_first();
                removes += actual.is_ok() as usize;
                assert_eq!(actual, expected, "{op:?}");
            }
            Op::RemoveLast => {
                let expected = model.pop_back().ok_or(CollectionError::EmptyCollection);
                let actual = list.remove_last();
                removes += actual.is_ok() as usize;
                assert_eq!(actual, expected, "{op:?}");
            }
            Op::Clear => {
                list.clear();
                model.clear();
                adds = 0;
                removes = 0;
            }
        }

        assert_eq!(list.len(), adds - removes);
        assert_eq!(list.len(), model.len());
        assert_eq!(list.is_empty(), list.len() == 0);
        assert_eq!(
            list.peek_first(),
            model.front().map(|x| x.as_ref()).ok_or(CollectionError::EmptyCollection)
        );
        assert_eq!(
            list.peek_last(),
            model.back().map(|x| x.as_ref()).ok_or(CollectionError::EmptyCollection)
        );
        assert_eq!(
            (&*list).into_iter().map(|x| x.copied()).collect_vec(),
            model.iter().copied().collect_vec()
        );
        check(&*list);
    }
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn singly_linked_list_matches_model(#[case] seed: u64) {
    let ops = random_ops(seed, 500);
    run_model(&mut SinglyLinkedList::<u8>::new(), &ops, |_| {});
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn doubly_linked_list_matches_model(#[case] seed: u64) {
    let ops = random_ops(seed, 500);
    run_model(&mut DoublyLinkedList::<u8>::new(), &ops, assert_links);
}

#[rstest]
#[case(5)]
#[case(6)]
fn doubly_linked_list_positional_removal_matches_model(#[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut list = DoublyLinkedList::<u8>::new();
    let mut model = Vec::new();

    for _ in 0..300 {
        if model.is_empty() || rng.gen_bool(0.6) {
            let value: u8 = rng.gen_range(0..10);
            list.add_last(value);
            model.push(Some(value));
        } else {
            let index = rng.gen_range(0..model.len());
            assert_eq!(list.remove_at(index), Ok(model.remove(index)));
        }

        let needle: u8 = rng.gen_range(0..10);
        assert_eq!(
            LinearSearch::index_of(&list, Some(&needle)),
            model.iter().position(|x| *x == Some(needle))
        );
        assert_links(&list);
    }
}

#[test]
fn dynamic_array_matches_vec() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut array = DynamicArray::<u16>::with_capacity(0).unwrap();
    let mut model = Vec::new();

    for _ in 0..500 {
        match rng.gen_range(0..4) {
            0 | 1 => {
                let value: u16 = rng.gen();
                array.append(value);
                model.push(value);
            }
            2 => {
                let index = rng.gen_range(0..=model.len());
                let value: u16 = rng.gen();
                assert_eq!(array.insert_at(index, value), Ok(()));
                model.insert(index, value);
            }
            _ if !model.is_empty() => {
                let index = rng.gen_range(0..model.len());
                assert_eq!(array.remove_at(index), Ok(model.remove(index)));
            }
            _ => {}
        }

        assert!(array.len() <= array.capacity());
        assert_eq!(HasLength::len(&array), model.len());
        assert_eq!(Iterable::iter(&array).copied().collect_vec(), model);
    }
}
