//! HTTP client for the admin-scoped Kawane backend endpoints.
//!
//! Unlike the storefront client, nothing here is cached: back-office
//! screens must reflect the backend immediately after a mutation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use kawane_core::{
    BannerId, DealId, LookbookPhotoId, NotificationId, OrderId, OrderStatus, PaymentStatus,
    ProductId, ShipmentId, ShipmentStatus, UserId, UserRole,
};

use crate::config::KawaneAdminApiConfig;

use super::types::{
    AdminBanner, AdminDeal, AdminLookbookPhoto, AdminOrder, AdminProduct, AdminUser, BannerUpdate,
    DailyRevenue, DealUpdate, InventoryItem, ListParams, NewBanner, NewDeal, NewLookbookPhoto,
    NewProduct, NewShipment, Notification, OrderFilter, Page, ProductUpdate, SalesSummary,
    SearchHit, Shipment, StockAdjustment,
};
use super::{ApiError, parse_error_message};

/// Header carrying the admin service token.
const SERVICE_TOKEN_HEADER: &str = "x-kawane-service-token";

/// Staff login response.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffAuthSession {
    pub token: String,
    pub user: AdminUser,
}

/// Unread-count envelope.
#[derive(Debug, serde::Deserialize)]
struct CountPayload {
    count: u64,
}

/// Client for admin-scoped Kawane backend endpoints.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AdminApi {
    inner: Arc<AdminApiInner>,
}

struct AdminApiInner {
    client: reqwest::Client,
    base_url: String,
    admin_token: String,
}

impl AdminApi {
    /// Create a new admin API client.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized (startup-only path).
    #[must_use]
    pub fn new(config: &KawaneAdminApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("reqwest client with static configuration builds");

        Self {
            inner: Arc::new(AdminApiInner {
                client,
                base_url: config.base_url.clone(),
                admin_token: config.admin_token.expose_secret().to_string(),
            }),
        }
    }

    // =========================================================================
    // Transport
    // =========================================================================

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&(impl Serialize + Sync)>,
    ) -> Result<T, ApiError> {
        let url = format!("{}/admin{path}", self.inner.base_url);

        let mut request = self
            .inner
            .client
            .request(method, &url)
            .header(SERVICE_TOKEN_HEADER, &self.inner.admin_token);

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(1);
            return Err(ApiError::RateLimited(retry_after));
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }

        let response_text = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            let message = parse_error_message(&response_text).unwrap_or_else(|| path.to_string());
            return Err(ApiError::NotFound(message));
        }

        if !status.is_success() {
            let message = parse_error_message(&response_text)
                .unwrap_or_else(|| response_text.chars().take(200).collect::<String>());
            tracing::error!(
                status = %status,
                path = %path,
                message = %message,
                "Kawane admin API returned non-success status"
            );
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str(&response_text) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %path,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Kawane admin API response"
                );
                Err(ApiError::Parse(e))
            }
        }
    }

    async fn execute_no_content(
        &self,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + Sync)>,
    ) -> Result<(), ApiError> {
        let url = format!("{}/admin{path}", self.inner.base_url);

        let mut request = self
            .inner
            .client
            .request(method, &url)
            .header(SERVICE_TOKEN_HEADER, &self.inner.admin_token);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = parse_error_message(&body_text)
                .unwrap_or_else(|| body_text.chars().take(200).collect::<String>());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }

    const NO_BODY: Option<&'static ()> = None;

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange staff credentials for a bearer token.
    ///
    /// The caller must still check the returned role with
    /// `UserRole::can_access_admin` before establishing a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are invalid or the request fails.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<StaffAuthSession, ApiError> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        self.execute(
            Method::POST,
            "/auth/login",
            &[],
            Some(&LoginRequest { email, password }),
        )
        .await
    }

    /// Revoke a staff bearer token server-side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        #[derive(Serialize)]
        struct LogoutRequest<'a> {
            token: &'a str,
        }

        self.execute_no_content(Method::POST, "/auth/logout", Some(&LogoutRequest { token }))
            .await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// List orders with optional status/payment/text filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, filter: &OrderFilter) -> Result<Page<AdminOrder>, ApiError> {
        self.execute(Method::GET, "/orders", &filter.to_query(), Self::NO_BODY)
            .await
    }

    /// Fetch a single order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is not found or the request fails.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn get_order(&self, order_id: &OrderId) -> Result<AdminOrder, ApiError> {
        self.execute(
            Method::GET,
            &format!("/orders/{order_id}"),
            &[],
            Self::NO_BODY,
        )
        .await
    }

    /// Move an order to a new lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the transition.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<AdminOrder, ApiError> {
        #[derive(Serialize)]
        struct StatusUpdate {
            status: OrderStatus,
        }

        self.execute(
            Method::POST,
            &format!("/orders/{order_id}/status"),
            &[],
            Some(&StatusUpdate { status }),
        )
        .await
    }

    /// Set an order's payment status (manual payments, refunds).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the change.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn update_payment_status(
        &self,
        order_id: &OrderId,
        status: PaymentStatus,
    ) -> Result<AdminOrder, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct PaymentStatusUpdate {
            payment_status: PaymentStatus,
        }

        self.execute(
            Method::POST,
            &format!("/orders/{order_id}/payment-status"),
            &[],
            Some(&PaymentStatusUpdate {
                payment_status: status,
            }),
        )
        .await
    }

    /// Cancel an order on behalf of staff.
    ///
    /// # Errors
    ///
    /// Returns an error if the order can no longer be cancelled.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn cancel_order(&self, order_id: &OrderId) -> Result<AdminOrder, ApiError> {
        self.execute(
            Method::POST,
            &format!("/orders/{order_id}/cancel"),
            &[],
            Self::NO_BODY,
        )
        .await
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// List products.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self, params: &ListParams) -> Result<Page<AdminProduct>, ApiError> {
        self.execute(Method::GET, "/products", &params.to_query(), Self::NO_BODY)
            .await
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product(&self, product_id: &ProductId) -> Result<AdminProduct, ApiError> {
        self.execute(
            Method::GET,
            &format!("/products/{product_id}"),
            &[],
            Self::NO_BODY,
        )
        .await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is rejected or the request fails.
    #[instrument(skip(self, product))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<AdminProduct, ApiError> {
        self.execute(Method::POST, "/products", &[], Some(product))
            .await
    }

    /// Apply a partial update to a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the request fails.
    #[instrument(skip(self, update), fields(product_id = %product_id))]
    pub async fn update_product(
        &self,
        product_id: &ProductId,
        update: &ProductUpdate,
    ) -> Result<AdminProduct, ApiError> {
        self.execute(
            Method::PATCH,
            &format!("/products/{product_id}"),
            &[],
            Some(update),
        )
        .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found or the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn delete_product(&self, product_id: &ProductId) -> Result<(), ApiError> {
        self.execute_no_content(
            Method::DELETE,
            &format!("/products/{product_id}"),
            Self::NO_BODY,
        )
        .await
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    /// List inventory rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_inventory(
        &self,
        params: &ListParams,
    ) -> Result<Page<InventoryItem>, ApiError> {
        self.execute(Method::GET, "/inventory", &params.to_query(), Self::NO_BODY)
            .await
    }

    /// Apply a manual stock adjustment.
    ///
    /// # Errors
    ///
    /// Returns an error if the adjustment would drive stock negative or the
    /// request fails.
    #[instrument(skip(self, adjustment), fields(product_id = %product_id))]
    pub async fn adjust_stock(
        &self,
        product_id: &ProductId,
        adjustment: &StockAdjustment,
    ) -> Result<InventoryItem, ApiError> {
        self.execute(
            Method::POST,
            &format!("/inventory/{product_id}/adjust"),
            &[],
            Some(adjustment),
        )
        .await
    }

    /// Rows at or below their low-stock threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn low_stock(&self, threshold: Option<u32>) -> Result<Vec<InventoryItem>, ApiError> {
        let query: Vec<(&str, String)> = threshold
            .map(|t| vec![("threshold", t.to_string())])
            .unwrap_or_default();
        self.execute(Method::GET, "/inventory/low-stock", &query, Self::NO_BODY)
            .await
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// List user accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_users(&self, params: &ListParams) -> Result<Page<AdminUser>, ApiError> {
        self.execute(Method::GET, "/users", &params.to_query(), Self::NO_BODY)
            .await
    }

    /// Fetch a single user account.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_user(&self, user_id: &UserId) -> Result<AdminUser, ApiError> {
        self.execute(Method::GET, &format!("/users/{user_id}"), &[], Self::NO_BODY)
            .await
    }

    /// Change a user's role.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the change.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn update_user_role(
        &self,
        user_id: &UserId,
        role: UserRole,
    ) -> Result<AdminUser, ApiError> {
        #[derive(Serialize)]
        struct RoleUpdate {
            role: UserRole,
        }

        self.execute(
            Method::POST,
            &format!("/users/{user_id}/role"),
            &[],
            Some(&RoleUpdate { role }),
        )
        .await
    }

    /// Set a user's verification flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the user is not found or the request fails.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn set_user_verified(
        &self,
        user_id: &UserId,
        verified: bool,
    ) -> Result<AdminUser, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct VerifyUpdate {
            is_verified: bool,
        }

        self.execute(
            Method::POST,
            &format!("/users/{user_id}/verify"),
            &[],
            Some(&VerifyUpdate {
                is_verified: verified,
            }),
        )
        .await
    }

    // =========================================================================
    // Deals
    // =========================================================================

    /// List deals.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_deals(&self, params: &ListParams) -> Result<Page<AdminDeal>, ApiError> {
        self.execute(Method::GET, "/deals", &params.to_query(), Self::NO_BODY)
            .await
    }

    /// Create a deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is rejected or the request fails.
    #[instrument(skip(self, deal))]
    pub async fn create_deal(&self, deal: &NewDeal) -> Result<AdminDeal, ApiError> {
        self.execute(Method::POST, "/deals", &[], Some(deal)).await
    }

    /// Apply a partial update to a deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal is not found or the request fails.
    #[instrument(skip(self, update), fields(deal_id = %deal_id))]
    pub async fn update_deal(
        &self,
        deal_id: &DealId,
        update: &DealUpdate,
    ) -> Result<AdminDeal, ApiError> {
        self.execute(Method::PATCH, &format!("/deals/{deal_id}"), &[], Some(update))
            .await
    }

    /// Delete a deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal is not found or the request fails.
    #[instrument(skip(self), fields(deal_id = %deal_id))]
    pub async fn delete_deal(&self, deal_id: &DealId) -> Result<(), ApiError> {
        self.execute_no_content(Method::DELETE, &format!("/deals/{deal_id}"), Self::NO_BODY)
            .await
    }

    /// Activate or deactivate a deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the deal is not found or the request fails.
    #[instrument(skip(self), fields(deal_id = %deal_id, active))]
    pub async fn set_deal_active(
        &self,
        deal_id: &DealId,
        active: bool,
    ) -> Result<AdminDeal, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ActiveUpdate {
            is_active: bool,
        }

        self.execute(
            Method::POST,
            &format!("/deals/{deal_id}/active"),
            &[],
            Some(&ActiveUpdate { is_active: active }),
        )
        .await
    }

    // =========================================================================
    // Banners
    // =========================================================================

    /// List banners, ordered by position.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_banners(&self) -> Result<Vec<AdminBanner>, ApiError> {
        self.execute(Method::GET, "/banners", &[], Self::NO_BODY)
            .await
    }

    /// Create a banner (appended at the end of the order).
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is rejected or the request fails.
    #[instrument(skip(self, banner))]
    pub async fn create_banner(&self, banner: &NewBanner) -> Result<AdminBanner, ApiError> {
        self.execute(Method::POST, "/banners", &[], Some(banner))
            .await
    }

    /// Apply a partial update to a banner.
    ///
    /// # Errors
    ///
    /// Returns an error if the banner is not found or the request fails.
    #[instrument(skip(self, update), fields(banner_id = %banner_id))]
    pub async fn update_banner(
        &self,
        banner_id: &BannerId,
        update: &BannerUpdate,
    ) -> Result<AdminBanner, ApiError> {
        self.execute(
            Method::PATCH,
            &format!("/banners/{banner_id}"),
            &[],
            Some(update),
        )
        .await
    }

    /// Delete a banner.
    ///
    /// # Errors
    ///
    /// Returns an error if the banner is not found or the request fails.
    #[instrument(skip(self), fields(banner_id = %banner_id))]
    pub async fn delete_banner(&self, banner_id: &BannerId) -> Result<(), ApiError> {
        self.execute_no_content(Method::DELETE, &format!("/banners/{banner_id}"), Self::NO_BODY)
            .await
    }

    /// Reorder banners to match the given ID sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID set doesn't match or the request fails.
    #[instrument(skip(self, ids))]
    pub async fn reorder_banners(&self, ids: &[BannerId]) -> Result<Vec<AdminBanner>, ApiError> {
        #[derive(Serialize)]
        struct Reorder<'a> {
            ids: &'a [BannerId],
        }

        self.execute(Method::POST, "/banners/reorder", &[], Some(&Reorder { ids }))
            .await
    }

    // =========================================================================
    // Lookbook
    // =========================================================================

    /// List lookbook photos, in curated order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_lookbook(&self) -> Result<Vec<AdminLookbookPhoto>, ApiError> {
        self.execute(Method::GET, "/lookbook", &[], Self::NO_BODY)
            .await
    }

    /// Add a photo to the lookbook (appended at the end of the order).
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is rejected or the request fails.
    #[instrument(skip(self, photo))]
    pub async fn create_lookbook_photo(
        &self,
        photo: &NewLookbookPhoto,
    ) -> Result<AdminLookbookPhoto, ApiError> {
        self.execute(Method::POST, "/lookbook", &[], Some(photo))
            .await
    }

    /// Apply a partial update to a lookbook photo.
    ///
    /// # Errors
    ///
    /// Returns an error if the photo is not found or the request fails.
    #[instrument(skip(self, update), fields(photo_id = %photo_id))]
    pub async fn update_lookbook_photo(
        &self,
        photo_id: &LookbookPhotoId,
        update: &super::types::LookbookPhotoUpdate,
    ) -> Result<AdminLookbookPhoto, ApiError> {
        self.execute(
            Method::PATCH,
            &format!("/lookbook/{photo_id}"),
            &[],
            Some(update),
        )
        .await
    }

    /// Remove a photo from the lookbook.
    ///
    /// # Errors
    ///
    /// Returns an error if the photo is not found or the request fails.
    #[instrument(skip(self), fields(photo_id = %photo_id))]
    pub async fn delete_lookbook_photo(&self, photo_id: &LookbookPhotoId) -> Result<(), ApiError> {
        self.execute_no_content(
            Method::DELETE,
            &format!("/lookbook/{photo_id}"),
            Self::NO_BODY,
        )
        .await
    }

    /// Reorder the lookbook to match the given ID sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID set doesn't match or the request fails.
    #[instrument(skip(self, ids))]
    pub async fn reorder_lookbook(
        &self,
        ids: &[LookbookPhotoId],
    ) -> Result<Vec<AdminLookbookPhoto>, ApiError> {
        #[derive(Serialize)]
        struct Reorder<'a> {
            ids: &'a [LookbookPhotoId],
        }

        self.execute(Method::POST, "/lookbook/reorder", &[], Some(&Reorder { ids }))
            .await
    }

    // =========================================================================
    // Shipments
    // =========================================================================

    /// List shipments.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_shipments(&self, params: &ListParams) -> Result<Page<Shipment>, ApiError> {
        self.execute(Method::GET, "/shipments", &params.to_query(), Self::NO_BODY)
            .await
    }

    /// Fetch a single shipment.
    ///
    /// # Errors
    ///
    /// Returns an error if the shipment is not found or the request fails.
    #[instrument(skip(self), fields(shipment_id = %shipment_id))]
    pub async fn get_shipment(&self, shipment_id: &ShipmentId) -> Result<Shipment, ApiError> {
        self.execute(
            Method::GET,
            &format!("/shipments/{shipment_id}"),
            &[],
            Self::NO_BODY,
        )
        .await
    }

    /// Create a shipment for an order (moves the order to Shipped).
    ///
    /// # Errors
    ///
    /// Returns an error if the order cannot be shipped or the request fails.
    #[instrument(skip(self, shipment))]
    pub async fn create_shipment(&self, shipment: &NewShipment) -> Result<Shipment, ApiError> {
        self.execute(Method::POST, "/shipments", &[], Some(shipment))
            .await
    }

    /// Update a shipment's courier status.
    ///
    /// # Errors
    ///
    /// Returns an error if the shipment is not found or the request fails.
    #[instrument(skip(self), fields(shipment_id = %shipment_id))]
    pub async fn update_shipment_status(
        &self,
        shipment_id: &ShipmentId,
        status: ShipmentStatus,
    ) -> Result<Shipment, ApiError> {
        #[derive(Serialize)]
        struct StatusUpdate {
            status: ShipmentStatus,
        }

        self.execute(
            Method::POST,
            &format!("/shipments/{shipment_id}/status"),
            &[],
            Some(&StatusUpdate { status }),
        )
        .await
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// List notifications, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn list_notifications(
        &self,
        params: &ListParams,
    ) -> Result<Page<Notification>, ApiError> {
        self.execute(
            Method::GET,
            "/notifications",
            &params.to_query(),
            Self::NO_BODY,
        )
        .await
    }

    /// Unread notification count.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn unread_count(&self) -> Result<u64, ApiError> {
        let payload: CountPayload = self
            .execute(
                Method::GET,
                "/notifications/unread-count",
                &[],
                Self::NO_BODY,
            )
            .await?;
        Ok(payload.count)
    }

    /// Mark one notification read.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification is not found or the request fails.
    #[instrument(skip(self), fields(notification_id = %notification_id))]
    pub async fn mark_notification_read(
        &self,
        notification_id: &NotificationId,
    ) -> Result<Notification, ApiError> {
        self.execute(
            Method::POST,
            &format!("/notifications/{notification_id}/read"),
            &[],
            Self::NO_BODY,
        )
        .await
    }

    /// Mark every notification read; returns how many changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn mark_all_notifications_read(&self) -> Result<u64, ApiError> {
        let payload: CountPayload = self
            .execute(
                Method::POST,
                "/notifications/read-all",
                &[],
                Self::NO_BODY,
            )
            .await?;
        Ok(payload.count)
    }

    // =========================================================================
    // Search & Analytics
    // =========================================================================

    /// Global search across orders, products, users, and notifications.
    ///
    /// Returns the backend's flat hit list; grouping happens in the search
    /// aggregator service.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn global_search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>, ApiError> {
        self.execute(
            Method::GET,
            "/search",
            &[("q", query.to_string()), ("limit", limit.to_string())],
            Self::NO_BODY,
        )
        .await
    }

    /// Aggregate sales figures for the trailing `days` window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn sales_summary(&self, days: u32) -> Result<SalesSummary, ApiError> {
        self.execute(
            Method::GET,
            "/analytics/summary",
            &[("days", days.to_string())],
            Self::NO_BODY,
        )
        .await
    }

    /// Per-day revenue rows for the trailing `days` window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn daily_revenue(&self, days: u32) -> Result<Vec<DailyRevenue>, ApiError> {
        self.execute(
            Method::GET,
            "/analytics/daily",
            &[("days", days.to_string())],
            Self::NO_BODY,
        )
        .await
    }
}
