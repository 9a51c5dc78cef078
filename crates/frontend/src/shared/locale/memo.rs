use std::sync::Arc;

/// Single-slot memo cell: remembers the last input and its output.
///
/// A call with an input equal (`PartialEq`, i.e. deep equality for derived
/// impls) to the previous one returns the cached `Arc` without running the
/// computation.
#[derive(Debug)]
pub struct MemoizedOne<I, O> {
    last: Option<(I, Arc<O>)>,
}

impl<I, O> Default for MemoizedOne<I, O> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<I: PartialEq + Clone, O> MemoizedOne<I, O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute<F>(&mut self, input: &I, compute: F) -> Arc<O>
    where
        F: FnOnce(&I) -> O,
    {
        if let Some((last_input, last_output)) = &self.last {
            if last_input == input {
                return Arc::clone(last_output);
            }
        }
        let output = Arc::new(compute(input));
        self.last = Some((input.clone(), Arc::clone(&output)));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::locale::locale_routes;
    use contracts::shared::routes::RouteDef;

    fn routes() -> Vec<RouteDef> {
        vec![RouteDef::new("/list")
            .name("list")
            .routes(vec![RouteDef::new("/list/table").name("table")])]
    }

    #[test]
    fn test_equal_input_returns_same_output() {
        let mut memo = MemoizedOne::new();
        let mut calls = 0;

        let first = memo.get_or_compute(&routes(), |r| {
            calls += 1;
            locale_routes(r, None, &|id: &str| id.to_string())
        });
        // отдельно собранное, но структурно равное дерево
        let second = memo.get_or_compute(&routes(), |r| {
            calls += 1;
            locale_routes(r, None, &|id: &str| id.to_string())
        });

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_structural_change_recomputes() {
        let mut memo = MemoizedOne::new();
        let format = |id: &str| id.to_string();
        let first = memo.get_or_compute(&routes(), |r| locale_routes(r, None, &format));

        let mut changed = routes();
        changed[0].routes.push(RouteDef::new("/list/cards").name("cards"));
        let second = memo.get_or_compute(&changed, |r| locale_routes(r, None, &format));

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second[0].children.len(), 2);
    }
}
