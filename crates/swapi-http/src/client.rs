//! Typed client for the catalog.

use futures_core::Stream;
use tracing::{debug, info, instrument};

use swapi_core::error::InvalidInputError;
use swapi_core::fetcher::{collect_pages, fetch_pages, fetch_resource};
use swapi_core::{
    ApiUrl, Entity, Fetch, Film, PagedResults, Person, Planet, Resource, ResourceKind,
    ResourceUrl, Result, Species, Starship, Vehicle,
};

use crate::config::ClientConfig;
use crate::http::HttpFetcher;

/// A film together with the people appearing in it.
#[derive(Debug, Clone)]
pub struct Cast {
    pub film: Film,
    pub people: Vec<Person>,
}

/// Client for the Star Wars API.
///
/// Listing methods take a page limit and an optional search term. A limit
/// of zero returns an empty list without contacting the service.
///
/// # Example
///
/// ```no_run
/// use swapi_http::SwapiClient;
///
/// # async fn example() -> Result<(), swapi_core::Error> {
/// let swapi = SwapiClient::new(Default::default())?;
///
/// let luke = swapi.person(1).await?;
/// println!("{} was born in {}", luke.name, luke.birth_year);
///
/// for ship in swapi.starships(1, Some("falcon")).await? {
///     println!("{}", ship.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SwapiClient<F = HttpFetcher> {
    api: ApiUrl,
    fetcher: F,
}

impl SwapiClient<HttpFetcher> {
    /// Create a client for the given base URL.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Self::with_config(ClientConfig::new(api))
    }

    /// Create a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config.api_url, fetcher))
    }
}

impl<F: Fetch> SwapiClient<F> {
    /// Create a client over a custom fetch adapter.
    pub fn with_fetcher(api: ApiUrl, fetcher: F) -> Self {
        Self { api, fetcher }
    }

    /// Returns the base URL this client talks to.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Fetch one record by id.
    pub async fn get<T: Resource>(&self, id: u32) -> Result<T> {
        fetch_resource(&self.fetcher, &self.api, T::KIND, id).await
    }

    /// Fetch up to `max_pages` pages of records and flatten them.
    pub async fn list<T: Resource>(&self, max_pages: u32, search: Option<&str>) -> Result<Vec<T>> {
        collect_pages(&self.fetcher, &self.api, T::KIND, max_pages, search).await
    }

    /// Stream the page envelopes of a listing, one request per page.
    pub fn pages<'a, T: Resource>(
        &'a self,
        max_pages: u32,
        search: Option<&'a str>,
    ) -> impl Stream<Item = Result<PagedResults<T>>> + Send + 'a {
        fetch_pages(&self.fetcher, &self.api, T::KIND, max_pages, search)
    }

    pub async fn person(&self, id: u32) -> Result<Person> {
        self.get(id).await
    }

    pub async fn people(&self, max_pages: u32, search: Option<&str>) -> Result<Vec<Person>> {
        self.list(max_pages, search).await
    }

    pub async fn planet(&self, id: u32) -> Result<Planet> {
        self.get(id).await
    }

    pub async fn planets(&self, max_pages: u32, search: Option<&str>) -> Result<Vec<Planet>> {
        self.list(max_pages, search).await
    }

    pub async fn film(&self, id: u32) -> Result<Film> {
        self.get(id).await
    }

    pub async fn films(&self, max_pages: u32, search: Option<&str>) -> Result<Vec<Film>> {
        self.list(max_pages, search).await
    }

    pub async fn species(&self, id: u32) -> Result<Species> {
        self.get(id).await
    }

    pub async fn species_list(
        &self,
        max_pages: u32,
        search: Option<&str>,
    ) -> Result<Vec<Species>> {
        self.list(max_pages, search).await
    }

    pub async fn vehicle(&self, id: u32) -> Result<Vehicle> {
        self.get(id).await
    }

    pub async fn vehicles(&self, max_pages: u32, search: Option<&str>) -> Result<Vec<Vehicle>> {
        self.list(max_pages, search).await
    }

    pub async fn starship(&self, id: u32) -> Result<Starship> {
        self.get(id).await
    }

    pub async fn starships(&self, max_pages: u32, search: Option<&str>) -> Result<Vec<Starship>> {
        self.list(max_pages, search).await
    }

    /// Fetch one record of the given kind as an [`Entity`].
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn entity(&self, kind: ResourceKind, id: u32) -> Result<Entity> {
        let entity = match kind {
            ResourceKind::People => self.get::<Person>(id).await?.into_entity(),
            ResourceKind::Planets => self.get::<Planet>(id).await?.into_entity(),
            ResourceKind::Films => self.get::<Film>(id).await?.into_entity(),
            ResourceKind::Species => self.get::<Species>(id).await?.into_entity(),
            ResourceKind::Vehicles => self.get::<Vehicle>(id).await?.into_entity(),
            ResourceKind::Starships => self.get::<Starship>(id).await?.into_entity(),
        };
        Ok(entity)
    }

    /// List records of the given kind as [`Entity`] values.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn entities(
        &self,
        kind: ResourceKind,
        max_pages: u32,
        search: Option<&str>,
    ) -> Result<Vec<Entity>> {
        match kind {
            ResourceKind::People => self.list_as_entities::<Person>(max_pages, search).await,
            ResourceKind::Planets => self.list_as_entities::<Planet>(max_pages, search).await,
            ResourceKind::Films => self.list_as_entities::<Film>(max_pages, search).await,
            ResourceKind::Species => self.list_as_entities::<Species>(max_pages, search).await,
            ResourceKind::Vehicles => self.list_as_entities::<Vehicle>(max_pages, search).await,
            ResourceKind::Starships => {
                self.list_as_entities::<Starship>(max_pages, search).await
            }
        }
    }

    /// Fetch one record by kind name (`people`, `person`, ...).
    pub async fn get_entity(&self, kind: &str, id: u32) -> Result<Entity> {
        self.entity(kind.parse()?, id).await
    }

    /// List records by kind name (`people`, `person`, ...).
    pub async fn list_entities(
        &self,
        kind: &str,
        max_pages: u32,
        search: Option<&str>,
    ) -> Result<Vec<Entity>> {
        self.entities(kind.parse()?, max_pages, search).await
    }

    /// Resolve a self URL against this client's base URL.
    pub fn resolve(&self, url: &str) -> Result<ResourceUrl> {
        ResourceUrl::resolve(&self.api, url)
    }

    /// Fetch the record a cross-reference URL points at.
    ///
    /// The URL must belong to this client's service and name `T`'s kind.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn follow<T: Resource>(&self, url: &str) -> Result<T> {
        let resolved = self.resolve(url)?;
        let kind = resolved.resource_kind()?;

        if kind != T::KIND {
            return Err(InvalidInputError::KindMismatch {
                value: url.to_string(),
                expected: T::KIND.segment().to_string(),
                actual: kind.segment().to_string(),
            }
            .into());
        }

        debug!(%resolved, "Following reference");
        self.get(resolved.id()).await
    }

    /// Find the first film matching `film_query` and everyone appearing in it.
    ///
    /// Walks every page of people. Returns `None` if no film matches.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn cast(&self, film_query: &str) -> Result<Option<Cast>> {
        let Some(film) = self.films(1, Some(film_query)).await?.into_iter().next() else {
            info!("No film matches the query");
            return Ok(None);
        };

        let people = self
            .people(u32::MAX, None)
            .await?
            .into_iter()
            .filter(|person| person.appears_in(&film.url))
            .collect::<Vec<_>>();

        info!(film = %film.title, people = people.len(), "Cast collected");
        Ok(Some(Cast { film, people }))
    }

    async fn list_as_entities<T: Resource>(
        &self,
        max_pages: u32,
        search: Option<&str>,
    ) -> Result<Vec<Entity>> {
        let records = self.list::<T>(max_pages, search).await?;
        Ok(records.into_iter().map(Resource::into_entity).collect())
    }
}
