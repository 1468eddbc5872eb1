use paginate::PageNum;

/// One browsable entry. Stands in for a database row.
#[derive(Debug, Clone)]
pub struct Item {
	pub id: i64,
	pub title: String,
}

pub struct Items(Vec<Item>);

impl Items {
	pub fn generate(count: i64) -> Self {
		Self(
			(1..=count)
				.map(|id| Item {
					id,
					title: format!("Specimen #{id:03}"),
				})
				.collect(),
		)
	}

	pub fn total_pages(&self, page_size: PageNum) -> PageNum {
		let len = self.0.len() as i64;
		std::cmp::max((len + page_size - 1) / page_size, 1)
	}

	/// The slice of items on 1-indexed `page`, clamped to the dataset.
	pub fn page(&self, page: PageNum, page_size: PageNum) -> &[Item] {
		let page_size = usize::try_from(page_size).unwrap_or(0);
		let start = usize::try_from(page - 1)
			.unwrap_or(0)
			.saturating_mul(page_size)
			.min(self.0.len());
		let end = start.saturating_add(page_size).min(self.0.len());
		&self.0[start..end]
	}
}
