use std::collections::BTreeMap;

use crate::{
    runtime::{Component, ComponentContext},
    Configurable,
};

/// Ordered component pipeline.
///
/// Components are ticked in ascending order of their order key, once per
/// frame.
pub struct Pipeline<Cnf: Clone> {
    map: BTreeMap<i32, Box<dyn Component<Cnf>>>,
}

impl<Cnf: Clone> Pipeline<Cnf> {
    pub fn new(components: Vec<(i32, Box<dyn Component<Cnf>>)>) -> Self {
        let mut map = BTreeMap::new();

        for (order, component) in components {
            map.insert(order, component);
        }

        Self { map }
    }

    pub fn make<C>(order: i32, config: Cnf) -> (i32, Box<dyn Component<Cnf>>)
    where
        C: Component<Cnf> + Send + Sync + 'static,
    {
        (order, Box::new(C::new(config)))
    }
}

impl<Cnf: Configurable> Component<Cnf> for Pipeline<Cnf> {
    fn new(_config: Cnf) -> Self
    where
        Self: Sized,
    {
        unimplemented!()
    }

    fn tick(&mut self, ctx: &mut ComponentContext) {
        for component in self.map.values_mut() {
            component.tick(ctx);
        }
    }
}
