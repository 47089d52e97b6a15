use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::ChangePasswordRequest;
use crate::models::auth::LoginRequest;
use crate::models::users::entities::UserRole;
use crate::services::AuthService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AUTH_SERVICE 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

// HTTP处理程序
pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn logout(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(&req).await
}

pub async fn refresh_token(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(&req).await
}

pub async fn verify_token(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.verify_token(&req).await
}

pub async fn get_user(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_user(&req).await
}

pub async fn change_password(
    req: HttpRequest,
    change_data: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .change_password(change_data.into_inner(), &req)
        .await
}

pub async fn reset_password(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.reset_password(user_id.0, &req).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            // 登录与刷新无需携带 access token
            .service(web::resource("/login").route(web::post().to(login)))
            .service(web::resource("/refresh").route(web::post().to(refresh_token)))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .service(web::resource("/logout").route(web::post().to(logout)))
                    .service(web::resource("/verify").route(web::get().to(verify_token)))
                    .service(web::resource("/me").route(web::get().to(get_user)))
                    .service(
                        web::resource("/password").route(web::put().to(change_password)),
                    )
                    .service(
                        web::resource("/password/reset/{id}").route(
                            web::post()
                                .to(reset_password)
                                // 仅管理员可将账户密码重置为初始密码
                                .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                        ),
                    ),
            ),
    );
}
