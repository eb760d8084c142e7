use crustadf::{
    adf::{
        self, AbstractDialecticalFramework, AdfError, Builder, EmptyFramework, GraphFramework,
        ResolutionMode, SharedFramework,
    },
    link::{ConstantLinkStrategy, Link, LinkStrategy, LinkType},
};
use std::{collections::HashSet, sync::Arc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum TestLink {
    Dependent,
    Attacking,
    Supporting,
    Unknown,
}

impl LinkType for TestLink {
    fn is_non_bipolar(&self) -> bool {
        *self == TestLink::Unknown
    }
}

type Acc = HashSet<usize>;

// the parents of an argument are the ones with the same remainder modulo 5, itself included
fn dependencies_of(n: usize, child: usize) -> Acc {
    (0..n).filter(|p| (p * 7 + child * 3) % 5 == 0).collect()
}

fn label_strategy(parent: &usize, child: &usize, _acc: &Acc) -> TestLink {
    match parent.cmp(child) {
        std::cmp::Ordering::Less => TestLink::Attacking,
        std::cmp::Ordering::Equal => TestLink::Unknown,
        std::cmp::Ordering::Greater => TestLink::Supporting,
    }
}

fn constant_strategy(link_type: TestLink) -> ConstantLinkStrategy<TestLink> {
    ConstantLinkStrategy::new(link_type)
}

fn numbered_builder(n: usize) -> Builder<usize, Acc, TestLink> {
    let mut builder = Builder::new();
    for i in 0..n {
        builder.add_argument(i, dependencies_of(n, i));
    }
    builder.add_link(Link::new(6, 1, TestLink::Dependent));
    builder
}

fn abc_builder() -> Builder<&'static str, Vec<&'static str>, TestLink> {
    let mut builder = Builder::new();
    builder
        .add_argument("a", vec![])
        .add_argument("b", vec!["a"])
        .add_argument("c", vec!["a", "b"]);
    builder
}

fn assert_closure_invariant<F>(adf: &F, n: usize)
where
    F: AbstractDialecticalFramework<usize, Acc, TestLink>,
{
    for c in 0..n {
        let parents: HashSet<usize> = adf.parents(&c).unwrap().into_iter().copied().collect();
        assert_eq!(&parents, adf.acceptance_condition(&c).unwrap());
        for p in parents {
            assert!(adf.children(&p).unwrap().contains(&c));
        }
    }
}

fn assert_bipolarity_consistency<F>(adf: &F)
where
    F: AbstractDialecticalFramework<usize, Acc, TestLink>,
{
    let k = adf
        .links()
        .iter()
        .filter(|l| l.link_type().is_non_bipolar())
        .count();
    assert_eq!(k, adf.k_bipolar());
    assert_eq!(k == 0, adf.bipolar());
}

macro_rules! test_for_mode {
    ($mode:ident, $suffix:literal) => {
        paste::item! {
            #[test]
            fn [< test_closure_invariant_ $suffix >] () {
                let mut builder = numbered_builder(20);
                builder.$mode(label_strategy);
                let adf = builder.build().unwrap();
                assert_eq!(20, adf.size());
                assert_closure_invariant(&adf, 20);
            }

            #[test]
            fn [< test_bipolarity_consistency_ $suffix >] () {
                let mut builder = numbered_builder(20);
                builder.$mode(label_strategy);
                let adf = builder.build().unwrap();
                assert_bipolarity_consistency(&adf);
                assert!(!adf.bipolar());
            }

            #[test]
            fn [< test_memoized_links_are_stable_ $suffix >] () {
                let mut builder = numbered_builder(20);
                builder.$mode(label_strategy);
                let adf = builder.build().unwrap();
                let first = adf.links();
                for link in first.iter() {
                    assert_eq!(link, &adf.link(link.parent(), link.child()).unwrap());
                }
                assert_eq!(first, adf.links());
            }

            #[test]
            fn [< test_explicit_link_wins_ $suffix >] () {
                let mut builder = numbered_builder(20);
                builder.$mode(label_strategy);
                let adf = builder.build().unwrap();
                assert_eq!(TestLink::Dependent, adf.link(&6, &1).unwrap().link_type());
            }

            #[test]
            fn [< test_scenario_abc_ $suffix >] () {
                let mut builder = abc_builder();
                builder.$mode(constant_strategy(TestLink::Dependent));
                let adf = builder.build().unwrap();
                assert_eq!(
                    HashSet::from([
                        Link::new("a", "b", TestLink::Dependent),
                        Link::new("a", "c", TestLink::Dependent),
                        Link::new("b", "c", TestLink::Dependent),
                    ]),
                    adf.links()
                );
                assert_eq!(0, adf.k_bipolar());
                assert!(adf.bipolar());
                assert_eq!(HashSet::from([&"a", &"b"]), adf.parents(&"c").unwrap());
                assert_eq!(HashSet::from([&"b", &"c"]), adf.children(&"a").unwrap());
            }
        }
    };
}

test_for_mode!(eager, "eager");
test_for_mode!(lazy, "lazy");

#[test]
fn test_mode_equivalence() {
    let mut eager = numbered_builder(30);
    eager.eager(label_strategy);
    let mut lazy = numbered_builder(30);
    lazy.lazy(label_strategy);
    let eager = eager.build().unwrap();
    let lazy = lazy.build().unwrap();
    assert_eq!(eager.links(), lazy.links());
    assert_eq!(eager.k_bipolar(), lazy.k_bipolar());
    for link in eager.links() {
        assert_eq!(
            link.link_type(),
            lazy.link(link.parent(), link.child()).unwrap().link_type()
        );
    }
}

#[test]
fn test_mode_switch_by_name() {
    let strategy: Arc<dyn LinkStrategy<usize, Acc, TestLink>> = Arc::new(label_strategy);
    let mut links = Vec::new();
    for mode in ["eager", "lazy"] {
        let mut builder = numbered_builder(10);
        builder
            .with_mode(mode.parse::<ResolutionMode>().unwrap(), Some(Arc::clone(&strategy)))
            .unwrap();
        assert_eq!(mode, builder.resolution().mode().to_string());
        links.push(builder.build().unwrap().links());
    }
    assert_eq!(links[0], links[1]);
    let mut builder = numbered_builder(10);
    let err = builder.with_mode(ResolutionMode::Lazy, None).err().unwrap();
    assert!(matches!(
        err.downcast_ref::<AdfError>(),
        Some(AdfError::MissingStrategy(_))
    ));
}

#[test]
fn test_provided_mode_with_missing_links() {
    let mut builder = abc_builder();
    builder.add_link(Link::new("a", "b", TestLink::Attacking));
    let err = builder.build().err().unwrap();
    assert_eq!(
        Some(&AdfError::MissingLinks {
            count: 2,
            links: "a->c, b->c".to_string()
        }),
        err.downcast_ref::<AdfError>()
    );
}

#[test]
fn test_provided_mode_with_all_links() {
    let mut builder = abc_builder();
    builder
        .add_link(Link::new("a", "b", TestLink::Attacking))
        .add_link(Link::new("a", "c", TestLink::Supporting))
        .add_link(Link::new("b", "c", TestLink::Unknown));
    let adf = builder.build().unwrap();
    assert_eq!(3, adf.links().len());
    assert_eq!(3, adf.resolved_link_count());
    assert_eq!(1, adf.k_bipolar());
    assert!(!adf.bipolar());
}

#[test]
fn test_builder_is_reusable() {
    let mut builder = abc_builder();
    assert!(builder.build().is_err());
    builder.eager(constant_strategy(TestLink::Attacking));
    let first = builder.build().unwrap();
    builder.add_argument("d", vec!["c"]);
    let second = builder.build().unwrap();
    assert_eq!(3, first.size());
    assert_eq!(4, second.size());
    assert!(!first.contains(&"d"));
}

#[test]
fn test_removed_argument_breaks_dependents() {
    let mut builder = abc_builder();
    builder.eager(constant_strategy(TestLink::Attacking));
    assert_eq!(vec!["a"], builder.remove_argument(&"b").unwrap());
    let err = builder.build().err().unwrap();
    assert_eq!(
        Some(&AdfError::UndefinedDependency {
            parent: "b".to_string(),
            child: "c".to_string()
        }),
        err.downcast_ref::<AdfError>()
    );
    builder.add_argument("c", vec!["a"]);
    let adf = builder.build().unwrap();
    assert_eq!(HashSet::from([&"a", &"c"]), adf.arguments());
    assert!(builder.remove_argument(&"b").is_err());
}

#[test]
fn test_empty_framework() {
    let framework: EmptyFramework<usize, Acc, TestLink> = adf::empty();
    assert!(framework.arguments().is_empty());
    assert!(framework.links().is_empty());
    assert_eq!(0, framework.k_bipolar());
    assert!(framework.bipolar());
    for (x, y) in [(0, 0), (0, 1), (5, 2)] {
        assert!(framework.link(&x, &y).is_err());
    }
}

#[test]
fn test_empty_builder_gives_empty_framework() {
    let builder: Builder<usize, Acc, TestLink> = GraphFramework::builder();
    let adf = builder.build().unwrap();
    assert_eq!(0, adf.size());
    assert!(adf.bipolar());
}

#[test]
fn test_extension_preserves_invariants() {
    let mut base = numbered_builder(10);
    base.eager(label_strategy);
    let base: SharedFramework<usize, Acc, TestLink> = Arc::new(base.build().unwrap());
    let mut delta = Builder::new();
    for i in 10..15 {
        delta.add_argument(i, dependencies_of(15, i));
    }
    delta.lazy(label_strategy);
    let adf = delta.build_extension(Arc::clone(&base)).unwrap();
    assert_eq!(15, adf.size());
    assert_closure_invariant(&adf, 15);
    assert_bipolarity_consistency(&adf);

    let mut whole = numbered_builder(10);
    for i in 10..15 {
        whole.add_argument(i, dependencies_of(15, i));
    }
    whole.eager(label_strategy);
    assert_eq!(whole.build().unwrap().links(), adf.links());
}
