// Policy engine scenarios on value and reference vectors

use core::cmp::Ordering;

use stow_error::{Error, Result};
use stow_foundation::{match_region, InsertPolicy, RefVec, StoreVec};

/// Element with a sort key and a tag to tell equal-keyed elements apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    key: u32,
    tag: char,
}

const fn entry(key: u32, tag: char) -> Entry {
    Entry { key, tag }
}

fn by_key(a: &Entry, b: &Entry) -> Ordering {
    a.key.cmp(&b.key)
}

/// `[10, 20, 20, 30]` tagged `a b c d`, in storage of `capacity` slots.
fn sample(slots: &mut [Entry]) -> Result<StoreVec<'_, Entry>> {
    let mut vec = StoreVec::new(slots)?;
    for e in [entry(10, 'a'), entry(20, 'b'), entry(20, 'c'), entry(30, 'd')] {
        vec.push(e)?;
    }
    Ok(vec)
}

fn tags(vec: &StoreVec<'_, Entry>) -> String {
    vec.iter().map(|e| e.tag).collect()
}

fn keys(vec: &StoreVec<'_, Entry>) -> Vec<u32> {
    vec.iter().map(|e| e.key).collect()
}

#[test]
fn test_update_first_overwrites_one_slot_of_full_vector() -> Result<()> {
    let mut slots = [entry(0, '-'); 4];
    let mut vec = sample(&mut slots)?;
    assert!(vec.is_full());

    vec.sorted_insert(entry(20, 'N'), by_key, InsertPolicy::UpdateFirst)?;
    assert_eq!(tags(&vec), "aNcd");
    assert_eq!(vec.len(), 4);
    Ok(())
}

#[test]
fn test_insert_first_goes_before_the_run() -> Result<()> {
    let mut slots = [entry(0, '-'); 5];
    let mut vec = sample(&mut slots)?;

    vec.sorted_insert(entry(20, 'N'), by_key, InsertPolicy::InsertFirst)?;
    assert_eq!(keys(&vec), [10, 20, 20, 20, 30]);
    assert_eq!(tags(&vec), "aNbcd");
    assert_eq!(vec.len(), 5);
    Ok(())
}

#[test]
fn test_insert_duplicate_into_full_vector_fails_full() -> Result<()> {
    let mut slots = [entry(0, '-'); 2];
    let mut vec = StoreVec::new(&mut slots)?;
    vec.push(entry(1, 'a'))?;
    vec.push(entry(1, 'b'))?;

    let outcome = vec.sorted_insert(entry(1, 'N'), by_key, InsertPolicy::InsertDuplicate);
    assert_eq!(outcome, Err(Error::FULL));
    assert_eq!(tags(&vec), "ab");
    assert_eq!(vec.len(), 2);
    Ok(())
}

#[test]
fn test_every_policy_on_a_match() -> Result<()> {
    // (policy, expected tags or error) for candidate key 20 on [10, 20, 20, 30]
    let cases: [(InsertPolicy, core::result::Result<&str, Error>); 10] = [
        (InsertPolicy::Any, Ok("abcNd")),
        (InsertPolicy::InsertFirst, Ok("aNbcd")),
        (InsertPolicy::InsertLast, Ok("abcNd")),
        (InsertPolicy::UpdateFirst, Ok("aNcd")),
        (InsertPolicy::UpdateLast, Ok("abNd")),
        (InsertPolicy::UpdateAll, Ok("aNNd")),
        (InsertPolicy::UpsertFirst, Ok("aNcd")),
        (InsertPolicy::UpsertLast, Ok("abNd")),
        (InsertPolicy::InsertUnique, Err(Error::EXISTS)),
        (InsertPolicy::InsertDuplicate, Ok("abcNd")),
    ];

    for (policy, expected) in cases {
        let mut slots = [entry(0, '-'); 6];
        let mut vec = sample(&mut slots)?;
        let outcome = vec.sorted_insert(entry(20, 'N'), by_key, policy);
        match expected {
            Ok(expected_tags) => {
                assert_eq!(outcome, Ok(()), "{policy}");
                assert_eq!(tags(&vec), expected_tags, "{policy}");
            }
            Err(err) => {
                assert_eq!(outcome, Err(err), "{policy}");
                assert_eq!(tags(&vec), "abcd", "{policy}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_every_policy_on_a_miss() -> Result<()> {
    // Candidate key 25 falls between the run of 20s and 30
    let cases: [(InsertPolicy, core::result::Result<&str, Error>); 10] = [
        (InsertPolicy::Any, Ok("abcNd")),
        (InsertPolicy::InsertFirst, Ok("abcNd")),
        (InsertPolicy::InsertLast, Ok("abcNd")),
        (InsertPolicy::UpdateFirst, Err(Error::NOT_FOUND)),
        (InsertPolicy::UpdateLast, Err(Error::NOT_FOUND)),
        (InsertPolicy::UpdateAll, Err(Error::NOT_FOUND)),
        (InsertPolicy::UpsertFirst, Ok("abcNd")),
        (InsertPolicy::UpsertLast, Ok("abcNd")),
        (InsertPolicy::InsertUnique, Ok("abcNd")),
        (InsertPolicy::InsertDuplicate, Err(Error::NOT_FOUND)),
    ];

    for (policy, expected) in cases {
        let mut slots = [entry(0, '-'); 6];
        let mut vec = sample(&mut slots)?;
        let outcome = vec.sorted_insert(entry(25, 'N'), by_key, policy);
        match expected {
            Ok(expected_tags) => {
                assert_eq!(outcome, Ok(()), "{policy}");
                assert_eq!(tags(&vec), expected_tags, "{policy}");
                assert_eq!(keys(&vec), [10, 20, 20, 25, 30], "{policy}");
            }
            Err(err) => {
                assert_eq!(outcome, Err(err), "{policy}");
                assert_eq!(tags(&vec), "abcd", "{policy}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_inserting_policies_fail_full_before_anything_else_changes() -> Result<()> {
    for policy in InsertPolicy::ALL {
        let mut slots = [entry(0, '-'); 4];
        let mut vec = sample(&mut slots)?;

        let on_match = vec.sorted_insert(entry(20, 'N'), by_key, policy);
        if policy.inserts_on_match() {
            assert_eq!(on_match, Err(Error::FULL), "{policy}");
            assert_eq!(tags(&vec), "abcd", "{policy}");
        }

        let mut slots = [entry(0, '-'); 4];
        let mut vec = sample(&mut slots)?;
        let on_miss = vec.sorted_insert(entry(5, 'N'), by_key, policy);
        if policy.inserts_on_miss() {
            assert_eq!(on_miss, Err(Error::FULL), "{policy}");
        } else {
            assert_eq!(on_miss, Err(Error::NOT_FOUND), "{policy}");
        }
        assert_eq!(tags(&vec), "abcd", "{policy}");
    }
    Ok(())
}

#[test]
fn test_insert_at_both_ends() -> Result<()> {
    let mut slots = [entry(0, '-'); 6];
    let mut vec = sample(&mut slots)?;
    vec.sorted_insert(entry(1, 'L'), by_key, InsertPolicy::InsertUnique)?;
    vec.sorted_insert(entry(99, 'R'), by_key, InsertPolicy::Any)?;
    assert_eq!(tags(&vec), "LabcdR");
    Ok(())
}

#[test]
fn test_sorted_insert_into_empty_vector() -> Result<()> {
    let mut slots = [entry(0, '-'); 3];
    let mut vec = StoreVec::new(&mut slots)?;
    assert_eq!(
        vec.sorted_insert(entry(4, 'x'), by_key, InsertPolicy::UpdateAll),
        Err(Error::NOT_FOUND)
    );
    vec.sorted_insert(entry(4, 'x'), by_key, InsertPolicy::UpsertLast)?;
    vec.sorted_insert(entry(2, 'y'), by_key, InsertPolicy::Any)?;
    vec.sorted_insert(entry(2, 'z'), by_key, InsertPolicy::InsertDuplicate)?;
    assert_eq!(tags(&vec), "yzx");
    Ok(())
}

#[test]
fn test_raw_policy_tags() -> Result<()> {
    let mut slots = [entry(0, '-'); 6];
    let mut vec = sample(&mut slots)?;
    let policy = InsertPolicy::try_from(8u8)?;
    assert_eq!(policy, InsertPolicy::InsertUnique);
    assert_eq!(
        vec.sorted_insert(entry(30, 'N'), by_key, policy),
        Err(Error::EXISTS)
    );
    assert!(InsertPolicy::try_from(10u8).is_err_and(|e| e.is_param()));
    Ok(())
}

#[test]
fn test_reference_vector_uses_same_rules() -> Result<()> {
    let data = [entry(10, 'a'), entry(20, 'b'), entry(20, 'c'), entry(30, 'd')];
    let candidate = entry(20, 'N');
    let placeholder = entry(0, '-');

    let mut slots = [&placeholder; 5];
    let mut vec = RefVec::new(&mut slots)?;
    for e in &data {
        vec.push(e)?;
    }

    let region = match_region(&vec, &&candidate, by_key);
    assert_eq!(region.matches, Some((1, 2)));

    vec.sorted_insert(&candidate, by_key, InsertPolicy::InsertLast)?;
    let seen: String = vec.iter().map(|e| e.tag).collect();
    assert_eq!(seen, "abcNd");
    assert!(core::ptr::eq(vec.get(3)?, &candidate));

    assert_eq!(
        vec.sorted_insert(&candidate, by_key, InsertPolicy::InsertDuplicate),
        Err(Error::FULL)
    );
    vec.sorted_insert(&placeholder, by_key, InsertPolicy::UpdateAll)
        .expect_err("no element has key 0");
    Ok(())
}

#[test]
fn test_reverse_order_comparator() -> Result<()> {
    let descending = |a: &u8, b: &u8| b.cmp(a);
    let mut slots = [0u8; 6];
    let mut vec = StoreVec::new(&mut slots)?;
    for v in [3, 9, 1, 9, 5] {
        vec.sorted_insert(v, descending, InsertPolicy::Any)?;
    }
    assert_eq!(vec.as_slice(), &[9, 9, 5, 3, 1]);
    assert_eq!(
        vec.sorted_insert(9, descending, InsertPolicy::InsertUnique),
        Err(Error::EXISTS)
    );
    Ok(())
}
