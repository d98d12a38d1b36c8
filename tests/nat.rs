use peano::nat::Nat;

#[test]
fn zero() {
    let zero = Nat::zero();
    assert!(zero.is_zero());
    assert_eq!(zero.pred(), None);
    assert_eq!(zero.to_u64(), 0);
    assert_eq!(Nat::default(), zero);
}

#[test]
fn succ() {
    let one = Nat::zero().succ();
    assert!(!one.is_zero());
    assert_eq!(one.pred(), Some(&Nat::zero()));
    assert_eq!(one.to_u64(), 1);
}

#[test]
fn number_conversion() {
    for n in [0, 1, 2, 7, 100, 1_000] {
        assert_eq!(u64::from(&Nat::from(n)), n);
    }
}

#[test]
fn equality() {
    let two = Nat::from(2);
    assert_eq!(two, two);
    assert_eq!(two, Nat::zero().succ().succ());
    assert_ne!(two, Nat::from(3));
    assert_ne!(Nat::from(3), two);
    assert_ne!(Nat::zero(), Nat::from(5));
    assert_ne!(Nat::from(5), Nat::zero());
}

#[test]
fn shared_predecessor() {
    let base = Nat::from(10);
    let a = base.clone().succ();
    let b = base.clone().succ();
    assert_eq!(a, b);
    drop(base);
    assert_eq!(a.pred(), b.pred());
    assert_eq!(a.to_u64(), 11);
}

#[test]
fn display() {
    assert_eq!(Nat::from(42).to_string(), "42");
    assert_eq!(format!("{:?}", Nat::from(3)), "Nat(3)");
}

#[test]
fn long_chain() {
    let big = Nat::from(1_000_000);
    let same = Nat::from(1_000_000);
    assert_eq!(big, same);
    assert_ne!(big, same.clone().succ());
    assert_eq!(big.to_u64(), 1_000_000);
    drop(big);
    drop(same);
}
