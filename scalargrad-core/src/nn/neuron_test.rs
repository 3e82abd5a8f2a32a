use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fixed_neuron(non_linearity: NonLinearity) -> Neuron<f64> {
    Neuron::from_parameters(
        vec![Scalar::new(2.0), Scalar::new(-1.0)],
        Scalar::new(0.5),
        non_linearity,
    )
}

fn inputs(values: &[f64]) -> Vec<Scalar<f64>> {
    values.iter().map(|&v| Scalar::new(v)).collect()
}

#[test]
fn test_neuron_new_initialization() {
    let mut rng = StdRng::seed_from_u64(11);
    let neuron: Neuron<f64> = Neuron::with_rng(5, NonLinearity::Tanh, &mut rng);
    assert_eq!(neuron.nin(), 5);
    assert_eq!(neuron.non_linearity(), NonLinearity::Tanh);
    assert_eq!(neuron.bias().value(), 0.0);
    for w in neuron.weights() {
        assert!((-1.0..=1.0).contains(&w.value()));
        assert!(w.is_leaf());
    }
}

#[test]
fn test_neuron_thread_rng_constructor() {
    let neuron: Neuron<f32> = Neuron::new(3, NonLinearity::Relu);
    assert_eq!(neuron.parameters().len(), 4);
}

#[test]
fn test_neuron_identity_forward_backward() {
    let neuron = fixed_neuron(NonLinearity::Identity);
    let x = inputs(&[3.0, 4.0]);
    let out = neuron.apply(&x);
    assert_relative_eq!(out.value(), 2.5);
    assert_eq!(out.op_label(), "+");

    out.backward();
    assert_eq!(neuron.weights()[0].grad(), 3.0);
    assert_eq!(neuron.weights()[1].grad(), 4.0);
    assert_eq!(neuron.bias().grad(), 1.0);
    assert_eq!(x[0].grad(), 2.0);
    assert_eq!(x[1].grad(), -1.0);
}

#[test]
fn test_neuron_tanh_forward_backward() {
    let neuron = fixed_neuron(NonLinearity::Tanh);
    let x = inputs(&[3.0, 4.0]);
    let out = neuron.apply(&x);
    assert_relative_eq!(out.value(), 2.5f64.tanh());
    assert_eq!(out.op_label(), "tanh");

    out.backward();
    let local = 1.0 - 2.5f64.tanh().powi(2);
    assert_relative_eq!(neuron.bias().grad(), local, epsilon = 1e-12);
    assert_relative_eq!(neuron.weights()[0].grad(), 3.0 * local, epsilon = 1e-12);
}

#[test]
fn test_neuron_relu_inactive() {
    let neuron = fixed_neuron(NonLinearity::Relu);
    let out = neuron.apply(&inputs(&[-3.0, 4.0]));
    assert_eq!(out.value(), 0.0);
    out.backward();
    assert_eq!(neuron.bias().grad(), 0.0);
    assert_eq!(neuron.weights()[0].grad(), 0.0);
}

#[test]
fn test_neuron_truncates_longer_input() {
    let neuron = fixed_neuron(NonLinearity::Identity);
    let x = inputs(&[3.0, 4.0, 100.0]);
    let out = neuron.apply(&x);
    assert_relative_eq!(out.value(), 2.5);
    out.backward();
    // The extra input is not part of the graph.
    assert_eq!(x[2].grad(), 0.0);
}

#[test]
fn test_neuron_truncates_shorter_input() {
    let neuron = fixed_neuron(NonLinearity::Identity);
    let out = neuron.apply(&inputs(&[3.0]));
    assert_relative_eq!(out.value(), 6.5);
    out.backward();
    assert_eq!(neuron.weights()[1].grad(), 0.0);
}

#[test]
fn test_neuron_try_apply() {
    let neuron = fixed_neuron(NonLinearity::Identity);
    let err = neuron.try_apply(&inputs(&[1.0])).unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::InputSizeMismatch {
            expected: 2,
            actual: 1
        }
    );
    let ok = neuron.try_apply(&inputs(&[1.0, 1.0])).unwrap();
    assert_relative_eq!(ok.value(), 1.5);
}

#[test]
fn test_neuron_parameters_order() {
    let neuron = fixed_neuron(NonLinearity::Identity);
    let params = neuron.parameters();
    assert_eq!(params.len(), 3);
    assert!(params[0].ptr_eq(&neuron.weights()[0]));
    assert!(params[1].ptr_eq(&neuron.weights()[1]));
    assert!(params[2].ptr_eq(neuron.bias()));
}

#[test]
fn test_neuron_zero_grad_and_set_non_linearity() {
    let mut neuron = fixed_neuron(NonLinearity::Identity);
    neuron.apply(&inputs(&[3.0, 4.0])).backward();
    assert_ne!(neuron.bias().grad(), 0.0);
    neuron.zero_grad();
    assert!(neuron.parameters().iter().all(|p| p.grad() == 0.0));

    neuron.set_non_linearity(NonLinearity::Relu);
    assert_eq!(neuron.non_linearity(), NonLinearity::Relu);
    assert_eq!(neuron.apply(&inputs(&[0.0, 4.0])).value(), 0.0);
}

#[test]
fn test_neuron_without_weights_is_its_bias() {
    let neuron = Neuron::from_parameters(Vec::new(), Scalar::new(1.25f64), NonLinearity::Identity);
    assert_eq!(neuron.apply(&[]).value(), 1.25);
}
