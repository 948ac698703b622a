// src/tests/loja_api_tests.rs
//
// A LojaApi de verdade, conversando com um backend de mentira (axum) que sobe
// numa porta qualquer de loopback.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::api::{LojaApi, PortalApi};
use crate::common::error::AppError;
use crate::services::FormularioService;
use crate::services::form_service::FormCliente;
use crate::session::{Identidade, Papel, Sessao};

async fn iniciar_backend(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endereco = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", endereco)
}

#[tokio::test]
async fn login_devolve_o_cliente_do_envelope() {
    let app = Router::new().route(
        "/api/auth/login",
        post(|Json(corpo): Json<Value>| async move {
            assert_eq!(corpo["cpf"], "12345678901");
            Json(json!({
                "cliente": {
                    "_id": "abc123",
                    "nome": "Maria da Silva",
                    "cpf": "12345678901",
                    "telefone": "11 99999-0000"
                }
            }))
        }),
    );
    let api = LojaApi::new(iniciar_backend(app).await);

    let cliente = api.login("12345678901").await.unwrap();

    assert_eq!(cliente.id.as_deref(), Some("abc123"));
    assert_eq!(cliente.nome, "Maria da Silva");
    assert_eq!(cliente.email, None);
}

#[tokio::test]
async fn login_recusado_propaga_o_detail_do_backend() {
    let app = Router::new().route(
        "/api/auth/login",
        post(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "CPF não encontrado" })),
            )
        }),
    );
    let api = LojaApi::new(iniciar_backend(app).await);

    let erro = api.login("99999999999").await.unwrap_err();

    match erro {
        AppError::LoginRecusado(detalhe) => assert_eq!(detalhe, "CPF não encontrado"),
        outro => panic!("esperava LoginRecusado, veio {:?}", outro),
    }
}

#[tokio::test]
async fn resposta_de_erro_sem_detail_cai_na_mensagem_padrao() {
    let app = Router::new().route(
        "/api/auth/login",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let api = LojaApi::new(iniciar_backend(app).await);

    let erro = api.login("12345678901").await.unwrap_err();

    match erro {
        AppError::LoginRecusado(detalhe) => assert_eq!(detalhe, "Erro ao fazer login"),
        outro => panic!("esperava LoginRecusado, veio {:?}", outro),
    }
}

#[tokio::test]
async fn backend_fora_do_ar_vira_erro_de_conexao() {
    // Porta 1 de loopback: conexão recusada na hora.
    let api = LojaApi::new("http://127.0.0.1:1");

    let erro = api.login("12345678901").await.unwrap_err();

    assert!(matches!(erro, AppError::ErroDeConexao(_)));
    assert_eq!(erro.mensagem_usuario(), "Erro de conexão");
}

#[tokio::test]
async fn servicos_do_cliente_usa_o_caminho_com_o_cpf() {
    let app = Router::new().route(
        "/api/cliente/{cpf}/servicos",
        get(|Path(cpf): Path<String>| async move {
            Json(json!([{
                "_id": "srv-1",
                "cliente_cpf": cpf,
                "nome_aparelho": "iPhone 12",
                "imei": "356938035643809",
                "cor": "preto",
                "tipo_servico": "Troca de tela",
                "data_servico": "2024-02-01",
                "data_fim_garantia": "2024-08-01",
                "valor_servico": 250.0,
                "tem_seguro": true,
                "valor_seguro": 50.0,
                "dias_seguro_restantes": 120
            }]))
        }),
    );
    let api = LojaApi::new(iniciar_backend(app).await);

    let servicos = api.servicos_do_cliente("12345678901").await.unwrap();

    assert_eq!(servicos.len(), 1);
    assert_eq!(servicos[0].id.as_deref(), Some("srv-1"));
    assert_eq!(servicos[0].cliente_cpf, "12345678901");
    assert_eq!(servicos[0].valor_servico, Decimal::new(250, 0));
    assert_eq!(servicos[0].dias_seguro_restantes, Some(120));
}

// Estado compartilhado do backend de mentira para o fluxo de cadastro.
#[derive(Clone, Default)]
struct EstadoFalso {
    clientes: Arc<Mutex<Vec<Value>>>,
}

#[tokio::test]
async fn cadastro_de_cliente_reseta_o_formulario_e_recarrega_o_painel() {
    let estado = EstadoFalso::default();
    let app = Router::new()
        .route(
            "/api/admin/cliente",
            post(
                |State(estado): State<EstadoFalso>, Json(corpo): Json<Value>| async move {
                    estado.clientes.lock().unwrap().push(corpo);
                    StatusCode::CREATED
                },
            ),
        )
        .route(
            "/api/admin/clientes",
            get(|State(estado): State<EstadoFalso>| async move {
                Json(Value::Array(estado.clientes.lock().unwrap().clone()))
            }),
        )
        .route("/api/admin/servicos", get(|| async { Json(json!([])) }))
        .route("/api/promocoes", get(|| async { Json(json!([])) }))
        .with_state(estado);

    let api = Arc::new(LojaApi::new(iniciar_backend(app).await));
    let formularios = FormularioService::new(api);

    let mut sessao = Sessao::nova();
    sessao.entrar(Identidade {
        papel: Papel::Admin,
        usuario: crate::models::Cliente {
            id: None,
            nome: "Administrador".to_string(),
            cpf: "000.000.000-00".to_string(),
            telefone: None,
            email: None,
        },
    });

    let form = FormCliente::default()
        .com_nome("Maria da Silva")
        .com_cpf("123.456.789-01")
        .com_telefone("11 99999-0000")
        .com_email("maria@email.com");

    let form_limpo = formularios.submeter_cliente(&mut sessao, &form).await.unwrap();

    assert_eq!(form_limpo, FormCliente::default());
    assert_eq!(sessao.todos_clientes.len(), 1);
    assert_eq!(sessao.todos_clientes[0].nome, "Maria da Silva");
    assert_eq!(sessao.todos_clientes[0].cpf, "12345678901");
}

#[tokio::test]
async fn cadastro_recusado_carrega_o_detail_do_backend() {
    let app = Router::new().route(
        "/api/admin/promocao",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "Título já existe" })),
            )
        }),
    );
    let api = LojaApi::new(iniciar_backend(app).await);

    let payload = crate::models::NovaPromocao {
        titulo: "Semana do vidro".to_string(),
        descricao: String::new(),
        desconto: "20%".to_string(),
        data_validade: chrono::NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        ativa: true,
    };
    let erro = api.criar_promocao(&payload).await.unwrap_err();

    match erro {
        AppError::CadastroRecusado { recurso, detalhe } => {
            assert_eq!(recurso, "promoção");
            assert_eq!(detalhe, "Título já existe");
        }
        outro => panic!("esperava CadastroRecusado, veio {:?}", outro),
    }
}
