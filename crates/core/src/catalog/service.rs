//! Paged access to the catalogue.

use fake::Fake;
use fake::faker::company::en::Buzzword;
use fake::faker::lorem::en::Word;
use pagewise_shared::{DEFAULT_PAGE_SIZE, PageRequest, PagedList};
use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::product::Product;

/// Source of paged products.
pub trait DataService: Send + Sync {
    /// Returns one page of products.
    ///
    /// A page below 1 is read as 1 and a page size below 1 as
    /// [`DEFAULT_PAGE_SIZE`]. A page past the end yields page 1.
    fn products_paged(&self, request: PageRequest) -> PagedList<Product>;
}

/// Catalogue held in memory, owned by whoever constructs it.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataService {
    products: Vec<Product>,
}

impl InMemoryDataService {
    /// Wraps an existing product list.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Generates `count` products from `seed`. The same seed always yields
    /// the same catalogue.
    #[must_use]
    pub fn seeded(count: u32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let products = (1..=count)
            .map(|id| {
                let buzzword: String = Buzzword().fake_with_rng(&mut rng);
                let word: String = Word().fake_with_rng(&mut rng);
                let sku: String = (&mut rng)
                    .sample_iter(Alphanumeric)
                    .take(8)
                    .map(|b| char::from(b).to_ascii_uppercase())
                    .collect();

                Product {
                    id,
                    name: format!("{buzzword} {}", capitalize(&word)),
                    price_cents: rng.random_range(199..=99_999),
                    sku,
                }
            })
            .collect();

        info!(count, seed, "Seeded in-memory catalogue");
        Self { products }
    }

    /// Number of products held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl DataService for InMemoryDataService {
    fn products_paged(&self, request: PageRequest) -> PagedList<Product> {
        let page = request.page.max(1);
        let page_size = if request.page_size < 1 {
            DEFAULT_PAGE_SIZE
        } else {
            request.page_size
        };

        let total = self.products.len() as u64;
        let mut list = PagedList::new(Vec::new(), page, page_size, total);
        if u64::from(page) > list.page_count() {
            debug!(page, page_count = list.page_count(), "Page out of range, serving page 1");
            list.current_page = 1;
        }

        let offset = PageRequest::new(list.current_page, page_size).offset();
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        list.results = self
            .products
            .iter()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect();

        debug!(
            page = list.current_page,
            page_size,
            returned = list.results.len(),
            total,
            "Served product page"
        );
        list
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
