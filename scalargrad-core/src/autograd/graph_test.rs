use super::*;
use approx::assert_relative_eq;

fn position<T: ScalarValue>(sorted: &[Scalar<T>], node: &Scalar<T>) -> usize {
    sorted
        .iter()
        .position(|n| n.ptr_eq(node))
        .expect("node missing from topological order")
}

#[test]
fn test_sort_single_leaf() {
    let a = Scalar::new(1.0f64);
    let sorted = topological_sort(&a);
    assert_eq!(sorted.len(), 1);
    assert!(sorted[0].ptr_eq(&a));
}

#[test]
fn test_sort_parents_precede_consumers() {
    let a = Scalar::new(2.0f64);
    let b = Scalar::new(-3.0f64);
    let c = Scalar::new(10.0f64);
    let ab = &a * &b;
    let sum = &ab + &c;
    let y = sum.pow(2.0);

    let sorted = topological_sort(&y);
    assert_eq!(sorted.len(), 6);
    assert!(sorted.last().unwrap().ptr_eq(&y));
    assert!(position(&sorted, &a) < position(&sorted, &ab));
    assert!(position(&sorted, &b) < position(&sorted, &ab));
    assert!(position(&sorted, &ab) < position(&sorted, &sum));
    assert!(position(&sorted, &c) < position(&sorted, &sum));
    assert!(position(&sorted, &sum) < position(&sorted, &y));
}

#[test]
fn test_sort_matches_recursive_order() {
    // Recursive post-order visits parents left to right: a, b, (a*b), c, (+)
    let a = Scalar::new(1i32);
    let b = Scalar::new(2i32);
    let c = Scalar::new(3i32);
    let ab = &a * &b;
    let y = &ab + &c;

    let sorted = topological_sort(&y);
    let expected = [&a, &b, &ab, &c, &y];
    assert_eq!(sorted.len(), expected.len());
    for (got, want) in sorted.iter().zip(expected) {
        assert!(got.ptr_eq(want));
    }
}

#[test]
fn test_sort_visits_shared_node_once() {
    let a = Scalar::new(3.0f64);
    let y = &a + &a;
    let sorted = topological_sort(&y);
    assert_eq!(sorted.len(), 2);
}

#[test]
fn test_sort_keys_on_identity_not_value() {
    let a = Scalar::new(1.0f64);
    let b = Scalar::new(1.0f64);
    let y = &a + &b;
    assert_eq!(topological_sort(&y).len(), 3);
}

#[test]
fn test_diamond_needs_reverse_topological_order() {
    // d = a*b; e = a+b; f = d*e
    // df/da = e*b + d = (-1)(-3) + (-6) = -3
    // df/db = e*a + d = (-1)(2) + (-6) = -8
    let a = Scalar::new(2.0f64);
    let b = Scalar::new(-3.0f64);
    let d = &a * &b;
    let e = &a + &b;
    let f = &d * &e;

    // Construction order runs consumers after producers: d and e push a zero
    // gradient before f has given them anything.
    f.set_grad(1.0);
    for node in topological_sort(&f) {
        let data = node.read_data();
        if let Some(op) = data.grad_fn {
            op.backward(data.value, data.grad, &data.parents);
        }
    }
    assert_relative_eq!(a.grad(), 0.0);
    assert_relative_eq!(b.grad(), 0.0);

    for node in [&a, &b, &d, &e, &f] {
        node.zero_grad();
    }
    f.backward();
    assert_relative_eq!(a.grad(), -3.0);
    assert_relative_eq!(b.grad(), -8.0);
    assert_relative_eq!(d.grad(), -1.0);
    assert_relative_eq!(e.grad(), -6.0);
}

#[test]
fn test_shared_intermediate_accumulates_before_propagating() {
    // s = x*x is consumed twice: f = s*s + s = x^4 + x^2, df/dx = 4x^3 + 2x
    let x = Scalar::new(3.0f64);
    let s = &x * &x;
    let f = &(&s * &s) + &s;
    f.backward();
    assert_relative_eq!(f.value(), 90.0);
    assert_relative_eq!(s.grad(), 2.0 * 9.0 + 1.0);
    assert_relative_eq!(x.grad(), 4.0 * 27.0 + 2.0 * 3.0);
}

#[test]
fn test_sort_deep_chain_does_not_recurse() {
    let x = Scalar::new(0i64);
    let one = Scalar::new(1i64);
    let mut y = x.clone();
    for _ in 0..200_000 {
        y = &y + &one;
    }
    let sorted = topological_sort(&y);
    assert_eq!(sorted.len(), 200_002);

    y.backward();
    assert_eq!(y.value(), 200_000);
    assert_eq!(x.grad(), 1);
    assert_eq!(one.grad(), 200_000);
}
