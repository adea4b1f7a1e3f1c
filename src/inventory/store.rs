//! Inventory store implementation

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Result, StockpileError};
use crate::product::{Field, FieldValue, IdSequence, Product, ProductId};
use crate::snapshot::{SnapshotInfo, SnapshotReader, SnapshotWriter};

/// In-memory product store
///
/// ## Invariants
/// - Every key equals the `id` of the product stored under it
/// - An insert never overwrites an existing key
/// - The id sequence is always past every stored id
pub struct Inventory {
    /// Inventory configuration
    config: Config,

    /// Stored products, ordered by id
    products: BTreeMap<ProductId, Product>,

    /// Id source for products created against this inventory
    sequence: IdSequence,
}

impl Inventory {
    /// Create an empty inventory with the default config
    pub fn new() -> Self {
        let config = Config::default();
        let sequence = IdSequence::starting_at(config.first_id);

        Self {
            config,
            products: BTreeMap::new(),
            sequence,
        }
    }

    /// Create an empty inventory with the given config
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let sequence = IdSequence::starting_at(config.first_id);

        Ok(Self {
            config,
            products: BTreeMap::new(),
            sequence,
        })
    }

    /// Create an inventory holding `products`
    ///
    /// Fails with `DuplicateId` if two products share an id.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Result<Self> {
        let mut inventory = Self::new();
        for product in products {
            inventory.insert(product)?;
        }
        Ok(inventory)
    }

    // =========================================================================
    // Id Generation
    // =========================================================================

    /// The id sequence backing this inventory
    pub fn sequence(&self) -> &IdSequence {
        &self.sequence
    }

    /// Construct a product with the next id (does not insert it)
    pub fn create(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: i64,
        price: f64,
    ) -> Result<Product> {
        Product::new(&self.sequence, name, category, stock, price)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Look up a product by id
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    /// All products in ascending id order
    ///
    /// The returned Vec is a fresh sequence; reordering or truncating it
    /// does not touch the inventory.
    pub fn all(&self) -> Vec<&Product> {
        self.products.values().collect()
    }

    /// Iterate products in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.values()
    }

    /// Products whose `field` equals `keyword`, in ascending id order
    ///
    /// A non-negative integer keyword is taken as an id when filtering on
    /// `Id`, so `filter(Field::Id, 2)` finds product 2. Fails with
    /// `FieldMismatch` when `keyword` is not the kind of value `field` holds
    /// (e.g. text for `Stock`).
    pub fn filter(&self, field: Field, keyword: impl Into<FieldValue>) -> Result<Vec<&Product>> {
        let keyword = keyword.into().for_field(field);

        if !field.accepts(&keyword) {
            return Err(StockpileError::FieldMismatch {
                field,
                value: keyword.to_string(),
            });
        }

        Ok(self
            .products
            .values()
            .filter(|product| product.matches(field, &keyword))
            .collect())
    }

    /// All products ordered by `field`
    ///
    /// The sort is stable: products with equal field values keep ascending
    /// id order in both directions.
    pub fn sort(&self, field: Field, ascending: bool) -> Vec<&Product> {
        let mut products = self.all();

        if ascending {
            products.sort_by(|a, b| a.compare_field(field, b));
        } else {
            products.sort_by(|a, b| b.compare_field(field, a));
        }

        products
    }

    /// Number of stored products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Add a product
    ///
    /// Fails with `DuplicateId` if its id is already stored, and with
    /// `IdOutOfRange` if the id is `u64::MAX`.
    pub fn insert(&mut self, product: Product) -> Result<()> {
        let id = product.id();
        if self.products.contains_key(&id) {
            return Err(StockpileError::DuplicateId(id));
        }

        self.sequence.advance_past(id)?;
        self.products.insert(id, product);
        debug!(%id, "inserted product");

        Ok(())
    }

    /// Add a batch of products, all or nothing
    ///
    /// The whole batch is checked first. If any id is already stored, or
    /// appears twice in the batch, or is `u64::MAX`, nothing is inserted.
    pub fn insert_all(&mut self, products: impl IntoIterator<Item = Product>) -> Result<()> {
        let products: Vec<Product> = products.into_iter().collect();

        let mut batch_ids = BTreeSet::new();
        for product in &products {
            let id = product.id();
            if self.products.contains_key(&id) || !batch_ids.insert(id) {
                return Err(StockpileError::DuplicateId(id));
            }
        }

        if let Some(&max_id) = batch_ids.last() {
            self.sequence.advance_past(max_id)?;
        }

        let count = products.len();
        self.products
            .extend(products.into_iter().map(|product| (product.id(), product)));
        debug!(count, "inserted product batch");

        Ok(())
    }

    /// Overwrite the stored product with `product`'s name, category, stock
    /// and price
    ///
    /// The stored product keeps its id. Fails with `ProductNotFound` if the
    /// id is not stored.
    pub fn update(&mut self, product: &Product) -> Result<()> {
        let id = product.id();
        let stored = self
            .products
            .get_mut(&id)
            .ok_or(StockpileError::ProductNotFound(id))?;

        stored.copy_fields_from(product);
        debug!(%id, "updated product");

        Ok(())
    }

    /// Remove the stored product with `product`'s id
    pub fn delete(&mut self, product: &Product) -> Result<()> {
        self.remove(product.id()).map(|_| ())
    }

    /// Remove a product by id, returning it
    pub fn remove(&mut self, id: ProductId) -> Result<Product> {
        let removed = self
            .products
            .remove(&id)
            .ok_or(StockpileError::ProductNotFound(id))?;

        debug!(%id, "deleted product");
        Ok(removed)
    }

    /// Remove every product
    ///
    /// The id sequence is not reset.
    pub fn clear(&mut self) {
        let count = self.products.len();
        self.products.clear();
        debug!(count, "cleared inventory");
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Write every product to a snapshot file at `path`
    ///
    /// Overwrites any existing file. A failure midway can leave a truncated
    /// file behind.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<SnapshotInfo> {
        let path = path.as_ref();

        let mut writer = SnapshotWriter::create(path, self.config.sync_strategy)?;
        for product in self.products.values() {
            writer.add(product)?;
        }
        let snapshot = writer.finish(self.sequence.peek())?;

        info!(
            path = %path.display(),
            records = snapshot.record_count,
            bytes = snapshot.file_size,
            "saved snapshot"
        );

        Ok(snapshot)
    }

    /// Replace the inventory's contents with the snapshot at `path`
    ///
    /// The file is fully read and validated before anything is replaced; on
    /// error the inventory is unchanged. On success the id sequence moves
    /// past both the persisted next id and every loaded id. Returns the
    /// number of products loaded.
    pub fn load_snapshot(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();

        let (products, next_id) = match Self::read_snapshot(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "rejected snapshot");
                return Err(e);
            }
        };

        if let Some(&max_id) = products.keys().next_back() {
            self.sequence.advance_past(max_id)?;
        }
        self.sequence.advance_to(next_id);
        self.products = products;

        info!(
            path = %path.display(),
            records = self.products.len(),
            next_id = self.sequence.peek(),
            "loaded snapshot"
        );

        Ok(self.products.len())
    }

    /// Save to the configured snapshot path
    pub fn save(&self) -> Result<SnapshotInfo> {
        let path = self.config.snapshot_path.clone();
        self.save_snapshot(path)
    }

    /// Load from the configured snapshot path
    pub fn load(&mut self) -> Result<usize> {
        let path = self.config.snapshot_path.clone();
        self.load_snapshot(path)
    }

    /// Read a snapshot into a fresh map, rejecting duplicate ids
    fn read_snapshot(path: &Path) -> Result<(BTreeMap<ProductId, Product>, u64)> {
        let reader = SnapshotReader::open(path)?;
        let next_id = reader.next_id();

        let mut products = BTreeMap::new();
        for record in reader.into_records()? {
            let product = record.restore();
            let id = product.id();
            if id.get() == u64::MAX {
                return Err(StockpileError::IdOutOfRange(id));
            }
            if products.insert(id, product).is_some() {
                return Err(StockpileError::SnapshotCorruption(format!(
                    "Duplicate product id {}",
                    id
                )));
            }
        }

        Ok((products, next_id))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
