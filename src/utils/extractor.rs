//! 路径参数安全提取器
//!
//! 将路径中的 ID 解析为正整数，解析失败时直接返回统一格式的 400 响应，
//! 避免每个 handler 重复做参数校验。

/// 定义一个从路径参数提取正整数 ID 的提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl std::ops::Deref for $name {
            type Target = i64;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                futures_util::future::ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let response = actix_web::HttpResponse::BadRequest().json(
                            $crate::models::ApiResponse::error_empty(
                                $crate::models::ErrorCode::BadRequest,
                                concat!("Invalid path parameter: ", $param),
                            ),
                        );
                        Err(actix_web::error::InternalError::from_response(
                            concat!("Invalid path parameter: ", $param),
                            response,
                        )
                        .into())
                    }
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafeTeacherIdI64, "teacher_id");
define_safe_i64_extractor!(SafeClassIdI64, "class_id");
define_safe_i64_extractor!(SafeCourseIdI64, "course_id");
define_safe_i64_extractor!(SafeScoreIdI64, "score_id");
