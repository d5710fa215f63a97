use parasort::{sort_full, sort_half, sort_partial};
use rand::Rng;

fn to_bytes(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

fn from_bytes(buf: &[u8]) -> Vec<u32> {
    buf.chunks_exact(4).map(|c| u32::from_ne_bytes(c.try_into().unwrap())).collect()
}

#[test]
fn full_range_matches_sort_partial_over_the_whole_width() {
    let mut rng = rand::rng();
    let values: Vec<u32> = (0..5_000).map(|_| rng.random()).collect();
    let mut a = to_bytes(&values);
    let mut b = a.clone();

    sort_full(&mut a, 4, 5).unwrap();
    sort_partial(&mut b, 4, 5, 0, 4).unwrap();

    assert_eq!(a, b);
}

#[test]
fn half_range_matches_sort_partial_over_the_lower_half() {
    let mut rng = rand::rng();
    let values: Vec<u32> = (0..5_000).map(|_| rng.random()).collect();
    let mut a = to_bytes(&values);
    let mut b = a.clone();

    sort_half(&mut a, 4, 5).unwrap();
    sort_partial(&mut b, 4, 5, 0, 2).unwrap();

    assert_eq!(a, b);
}

#[test]
fn result_is_invariant_to_worker_count() {
    let mut rng = rand::rng();
    let values: Vec<u32> = (0..20_000).map(|_| rng.random()).collect();

    let mut one = to_bytes(&values);
    let mut many = one.clone();

    sort_full(&mut one, 4, 1).unwrap();
    sort_full(&mut many, 4, 16).unwrap();

    assert_eq!(from_bytes(&one), from_bytes(&many));
}

#[test]
fn zero_threads_behaves_like_one_thread() {
    let mut rng = rand::rng();
    let values: Vec<u32> = (0..500).map(|_| rng.random()).collect();

    let mut zero = to_bytes(&values);
    let mut one = zero.clone();

    sort_full(&mut zero, 4, 0).unwrap();
    sort_full(&mut one, 4, 1).unwrap();

    assert_eq!(from_bytes(&zero), from_bytes(&one));
}
