//! HTTP 层：重定向路由、健康检查与中间件

pub mod middleware;
pub mod services;
