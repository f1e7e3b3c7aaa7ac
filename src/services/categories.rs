use crate::{
    error::{AppError, AppResult, InvalidCategoryReason},
    models::{CategoryName, CleanTitle, RawMember},
    services::{providers::CategoryProvider, titles::filter_titles},
};

/// Fetches every member of a category and returns the cleaned film titles.
///
/// Pages are requested one after another, starting from an empty continuation
/// token, until a response carries no token. Sub-categories are dropped and
/// disambiguation suffixes stripped; the API's ordering is preserved.
///
/// Transport and parse failures are returned as-is, with no retry.
pub async fn fetch_titles(
    provider: &dyn CategoryProvider,
    category: &CategoryName,
) -> AppResult<Vec<CleanTitle>> {
    let mut members: Vec<RawMember> = Vec::new();
    let mut continuation = String::new();
    let mut pages = 0usize;

    loop {
        let page = provider.fetch_page(category, &continuation).await?;
        pages += 1;
        members.extend(page.members);

        match page.continuation {
            Some(token) => continuation = token,
            None => break,
        }
    }

    let titles = filter_titles(&members);

    tracing::info!(
        category = %category,
        pages = pages,
        members = members.len(),
        titles = titles.len(),
        provider = provider.name(),
        "Category fetched"
    );

    Ok(titles)
}

/// Checks that a category name is usable and returns it parsed.
///
/// This is not a cheap check: after rejecting a blank name it performs a full
/// [`fetch_titles`] and fails with `InvalidCategory(empty)` when no titles come
/// back. A later fetch of the same category repeats every request.
pub async fn validate_category(
    provider: &dyn CategoryProvider,
    category: &str,
) -> AppResult<CategoryName> {
    let category = CategoryName::new(category)?;

    let titles = fetch_titles(provider, &category).await?;
    if titles.is_empty() {
        return Err(AppError::invalid_category(
            category.as_str(),
            InvalidCategoryReason::Empty,
        ));
    }

    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryPage;
    use crate::services::providers::MockCategoryProvider;
    use mockall::Sequence;

    fn page(titles: &[&str], continuation: Option<&str>) -> CategoryPage {
        CategoryPage {
            members: titles.iter().map(|t| RawMember::new(*t)).collect(),
            continuation: continuation.map(str::to_string),
        }
    }

    fn category(name: &str) -> CategoryName {
        CategoryName::new(name).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_follows_continuation() {
        let mut provider = MockCategoryProvider::new();
        let mut seq = Sequence::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_fetch_page()
            .withf(|c, token| c.as_str() == "Pixar_animated_films" && token.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(page(
                    &["Up (2009 film)", "Category:Pixar short films", "Cars (film)"],
                    Some("page|2"),
                ))
            });
        provider
            .expect_fetch_page()
            .withf(|_, token| token == "page|2")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(page(&["Category:Toy Story", "Toy Story"], None)));

        let titles = fetch_titles(&provider, &category("Pixar_animated_films"))
            .await
            .unwrap();

        assert_eq!(
            titles,
            vec![
                CleanTitle::new("Up"),
                CleanTitle::new("Cars"),
                CleanTitle::new("Toy Story"),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_single_page() {
        let mut provider = MockCategoryProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_fetch_page()
            .times(1)
            .returning(|_, _| Ok(page(&["Up"], None)));

        let titles = fetch_titles(&provider, &category("Pixar_animated_films"))
            .await
            .unwrap();
        assert_eq!(titles, vec![CleanTitle::new("Up")]);
    }

    #[tokio::test]
    async fn test_fetch_propagates_transport_failure() {
        let mut provider = MockCategoryProvider::new();
        provider
            .expect_fetch_page()
            .times(1)
            .returning(|_, _| Err(AppError::ExternalApi("down".to_string())));

        let err = fetch_titles(&provider, &category("Pixar_animated_films"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(_)));
    }

    #[tokio::test]
    async fn test_validate_blank_makes_no_request() {
        let mut provider = MockCategoryProvider::new();
        provider.expect_fetch_page().never();

        let err = validate_category(&provider, "").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidCategory {
                reason: InvalidCategoryReason::Blank,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_validate_empty_category() {
        let mut provider = MockCategoryProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_fetch_page()
            .times(1)
            .returning(|_, _| Ok(page(&["Category:Only subcategories"], None)));

        let err = validate_category(&provider, "Nothing_here").await.unwrap_err();
        match err {
            AppError::InvalidCategory { category, reason } => {
                assert_eq!(category, "Nothing_here");
                assert_eq!(reason, InvalidCategoryReason::Empty);
            }
            other => panic!("expected InvalidCategory, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_validate_non_empty_category() {
        let mut provider = MockCategoryProvider::new();
        provider.expect_name().return_const("mock");
        provider
            .expect_fetch_page()
            .times(1)
            .returning(|_, _| Ok(page(&["Beetlejuice"], None)));

        let name = validate_category(&provider, "1980s_comedy_films").await.unwrap();
        assert_eq!(name.as_str(), "1980s_comedy_films");
    }
}
