use crate::node::Node;

/// The decisions driving a [`PruningIter`] walk.
pub(crate) trait PruningOracle<T> {
    /// Returns true when the subtree rooted at `subtree_root` may contain a
    /// match, judged by its subtree max alone.
    fn visit_subtree(&self, subtree_root: &Node<T>) -> bool;

    /// Returns true when `n` and the right subtree of `n` should be descended
    /// into and evaluated.
    ///
    /// Must return false for all nodes ordered after `n` if it returns false
    /// for `n`.
    fn visit_right(&self, n: &Node<T>) -> bool;

    /// Returns true if `n` satisfies the pruning logic and should be yielded to
    /// the caller.
    fn filter_yield(&self, n: &Node<T>) -> bool;
}

/// An [`Iterator`] that performs a depth-first, in-order walk of a subtree and
/// yields [`Node`] instances that match a pruning predicate.
#[derive(Debug)]
pub(crate) struct PruningIter<'a, T, P> {
    stack: Vec<&'a Node<T>>,
    pruner: P,
}

impl<'a, T, P> PruningIter<'a, T, P>
where
    P: PruningOracle<T>,
{
    pub(crate) fn new(root: Option<&'a Node<T>>, pruner: P) -> Self {
        let mut this = Self {
            stack: vec![],
            pruner,
        };

        // Descend down the left side of the tree, pushing all the internal
        // nodes onto the stack until the left-most leaf is reached.
        if let Some(root) = root {
            this.push_subtree(root);
        }

        this
    }

    fn push_subtree(&mut self, subtree_root: &'a Node<T>) {
        let mut ptr = Some(subtree_root);

        while let Some(v) = ptr {
            if !self.pruner.visit_subtree(v) {
                // Prune this subtree rooted at "v" from the search.
                //
                // Every interval in this subtree ends before the query.
                break;
            }

            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, T, P> Iterator for PruningIter<'a, T, P>
where
    P: PruningOracle<T>,
{
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let v = self.stack.pop()?;

            if !self.pruner.visit_right(v) {
                // Prune this node and the right subtree from the search.
                //
                // Everything left on the stack is an ancestor ordered after
                // "v", so nothing else can match either.
                self.stack.clear();
                return None;
            }

            // Push the right subtree to be visited next.
            if let Some(right) = v.right() {
                self.push_subtree(right);
            }

            // Yield this node if it satisfies the pruning predicate.
            if self.pruner.filter_yield(v) {
                return Some(v);
            }
        }
    }
}
