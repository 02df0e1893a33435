//! Marketplace GraphQL client

use super::game_api::trim_base;
use crate::constants::{MARKETPLACE_GRAPHQL_URL, UPSTREAM_MARKETPLACE};
use crate::utils::{HttpResponseUtils, UpstreamCall};
use async_trait::async_trait;
use axh_domain::ports::providers::MarketplaceApi;
use axh_domain::value_objects::{AxieDetails, ItemMinimumPrice, TokenType};
use axh_domain::ApiResult;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

const MIN_PRICE_QUERY: &str = r"
query GetMinPriceErc1155Tokens($from: Int, $size: Int, $tokenIds: [String!], $tokenType: Erc1155Type) {
  erc1155Tokens(from: $from, size: $size, tokenIds: $tokenIds, tokenType: $tokenType) {
    results {
      id: tokenId
      tokenId
      minPrice
      tokenType
    }
  }
}
";

/// Trimmed `GetAxieDetail` query; untyped fields land in `AxieDetails::extra`
const AXIE_DETAIL_QUERY: &str = r"
query GetAxieDetail($axieId: ID!) {
  axie(axieId: $axieId) {
    id
    image
    class
    chain
    name
    genes
    owner
    birthDate
    bodyShape
    sireId
    matronId
    stage
    title
    breedCount
    level
    parts { id name class type specialGenes stage }
    stats { hp speed skill morale }
    ownerProfile { name }
    battleInfo { banned banUntil level }
    potentialPoints { beast aquatic plant bug bird reptile mech dawn dusk }
  }
}
";

const PUBLIC_PROFILE_QUERY: &str = r"
query GetPublicProfileWithRoninAddress($roninAddress: String!) {
  publicProfileWithRoninAddress(roninAddress: $roninAddress) {
    accountId
  }
}
";

#[derive(Debug, Deserialize)]
struct GraphQlResponse<D> {
    data: Option<D>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MinPriceData {
    erc1155_tokens: Erc1155Tokens,
}

#[derive(Debug, Deserialize)]
struct Erc1155Tokens {
    #[serde(default)]
    results: Vec<ItemMinimumPrice>,
}

#[derive(Debug, Deserialize)]
struct AxieData {
    axie: Option<AxieDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicProfileData {
    public_profile_with_ronin_address: Option<PublicProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicProfile {
    account_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    http_client: Client,
    url: String,
}

impl MarketplaceClient {
    pub fn new(http_client: Client, url: Option<String>) -> Self {
        Self {
            http_client,
            url: trim_base(url, MARKETPLACE_GRAPHQL_URL),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST a query and unwrap the GraphQL envelope
    ///
    /// A response whose `data` is null without errors yields `None`.
    async fn query<D: DeserializeOwned>(
        &self,
        call: UpstreamCall<'_>,
        query: &str,
        variables: serde_json::Value,
    ) -> ApiResult<Option<D>> {
        let response = self
            .http_client
            .post(&self.url)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| call.transport_error(&e))?;

        let body: GraphQlResponse<D> = HttpResponseUtils::check_and_parse(response, call).await?;
        if let Some(error) = body.errors.first() {
            return Err(call.error(format!("GraphQL error: {}", error.message)));
        }
        Ok(body.data)
    }
}

#[async_trait]
impl MarketplaceApi for MarketplaceClient {
    async fn fetch_min_prices(
        &self,
        token_type: TokenType,
        token_ids: &[String],
        from: u32,
        size: u32,
    ) -> ApiResult<Vec<ItemMinimumPrice>> {
        let call = UpstreamCall::new(UPSTREAM_MARKETPLACE, "getMinimumTokenPrice")
            .about(token_type.as_str());
        let mut variables = json!({
            "from": from,
            "size": size,
            "tokenType": token_type.as_str(),
        });
        if !token_ids.is_empty() {
            variables["tokenIds"] = json!(token_ids);
        }

        let data: Option<MinPriceData> = self.query(call, MIN_PRICE_QUERY, variables).await?;
        data.map(|data| data.erc1155_tokens.results)
            .ok_or_else(|| call.error("GraphQL response carried no data"))
    }

    async fn fetch_axie(&self, axie_id: u64) -> ApiResult<Option<AxieDetails>> {
        let entity = axie_id.to_string();
        let call = UpstreamCall::new(UPSTREAM_MARKETPLACE, "getAxieDetails").about(&entity);
        let data: Option<AxieData> = self
            .query(call, AXIE_DETAIL_QUERY, json!({ "axieId": entity.as_str() }))
            .await?;
        Ok(data.and_then(|data| data.axie))
    }

    async fn fetch_account_id(&self, address: &str) -> ApiResult<Option<String>> {
        let call =
            UpstreamCall::new(UPSTREAM_MARKETPLACE, "getPublicProfileWithRoninAddress").about(address);
        let data: Option<PublicProfileData> = self
            .query(call, PUBLIC_PROFILE_QUERY, json!({ "roninAddress": address }))
            .await?;
        Ok(data
            .and_then(|data| data.public_profile_with_ronin_address)
            .and_then(|profile| profile.account_id)
            .filter(|id| !id.is_empty()))
    }

    fn provider_name(&self) -> &str {
        "marketplace"
    }
}
