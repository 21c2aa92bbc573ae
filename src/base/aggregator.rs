use crate::base;

/// Summed amount for one classification code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    /// Resolved name, if the lookup or the first contributing record had one.
    pub name: Option<String>,
    pub amount: base::Amount,
}

/// Buckets keyed by code, in order of first contribution.
pub type Buckets = base::Aggregate<String, Bucket>;

/// Groups a metric node set by classification code for the active grouping.
pub struct Aggregator<'n, N: ?Sized> {
    names: &'n N,
    grouping: base::Grouping,
}

impl<'n, N> Aggregator<'n, N>
where
    N: base::ClassificationNames + ?Sized,
{
    pub fn new(names: &'n N, grouping: base::Grouping) -> Self {
        Self { names, grouping }
    }

    /// Buckets the records shown one drill level below `parent`.
    ///
    /// Intermediate levels truncate the grouping dimension's code and keep only
    /// strict descendants of `parent`. The leaf level buckets by the raw code
    /// of the complementary dimension, without a prefix filter: the upstream
    /// query has already been scoped to `parent`.
    pub fn group_level(
        &self,
        set: &base::MetricNodeSet,
        level: base::DrillLevel,
        parent: &str,
    ) -> Buckets {
        let dimension = level.dimension(self.grouping);
        let mut buckets = Buckets::default();
        match base::Depth::of(level) {
            Some(depth) => {
                let parent_norm = base::ClassificationCode::normalize(parent);
                for node in set.iter() {
                    let group_code = base::ClassificationCode::truncate(
                        node.code_or_unknown(dimension),
                        depth,
                    );
                    if !group_code.starts_with(&parent_norm) || group_code == parent_norm {
                        continue;
                    }
                    self.add(&mut buckets, group_code, node, dimension, Some(depth));
                }
            }
            None => {
                for node in set.iter() {
                    let code = node.code_or_unknown(dimension).to_string();
                    self.add(&mut buckets, code, node, dimension, None);
                }
            }
        }
        buckets
    }

    /// Buckets every record by its grouping-dimension code truncated to
    /// `depth`. Used for the rows of the root table.
    pub fn group_root(&self, set: &base::MetricNodeSet, depth: base::Depth) -> Buckets {
        let mut buckets = Buckets::default();
        for node in set.iter() {
            let code = base::ClassificationCode::truncate(node.code_or_unknown(self.grouping), depth);
            self.add(&mut buckets, code, node, self.grouping, Some(depth));
        }
        buckets
    }

    fn add(
        &self,
        buckets: &mut Buckets,
        code: String,
        node: &base::MetricNode,
        dimension: base::Grouping,
        depth: Option<base::Depth>,
    ) {
        let name = || {
            self.lookup(&code, dimension, depth)
                .or_else(|| node.name(dimension))
                .map(str::to_string)
        };
        let bucket = buckets.entry_or_insert_with(code.clone(), || Bucket {
            name: name(),
            amount: base::Amount::ZERO,
        });
        bucket.amount += node.amount();
    }

    fn lookup(
        &self,
        code: &str,
        dimension: base::Grouping,
        depth: Option<base::Depth>,
    ) -> Option<&'n str> {
        match (dimension, depth) {
            (base::Grouping::Fn, _) => self.names.functional(code),
            (base::Grouping::Ec, Some(base::Depth::Chapter | base::Depth::Subchapter)) => self
                .names
                .economic_subchapter(code)
                .or_else(|| self.names.economic(code)),
            (base::Grouping::Ec, _) => self.names.economic(code),
        }
    }
}
