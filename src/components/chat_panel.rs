use cosmoscope::chat::{self, ChatAction, ChatRequest, ChatRole, ChatTranscript, ChatTurn};
use cosmoscope::{ChatConfig, ChatError};
use gloo_net::http::Request;
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ChatPanelProps {
    pub config: ChatConfig,
    pub on_close: Callback<()>,
}

async fn request_reply(cfg: &ChatConfig, turns: &[ChatTurn]) -> Result<String, ChatError> {
    let key = cfg.api_key.as_deref().ok_or(ChatError::NotConfigured)?;
    let body = ChatRequest::from_transcript(cfg, turns);
    let resp = Request::post(&cfg.endpoint)
        .header("Authorization", &format!("Bearer {key}"))
        .json(&body)
        .map_err(|e| ChatError::Http(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Http(e.to_string()))?;
    if !resp.ok() {
        return Err(ChatError::Http(resp.status_text()));
    }
    let text = resp.text().await.map_err(|e| ChatError::Http(e.to_string()))?;
    chat::parse_reply(&text)
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let transcript = use_reducer(|| ChatTranscript::new(&props.config.greeting));
    let input = use_state(String::new);

    let send = {
        let transcript = transcript.clone();
        let input = input.clone();
        let cfg = props.config.clone();
        Callback::from(move |_: ()| {
            let text = (*input).clone();
            if !transcript.can_send(&text) {
                return;
            }
            let mut turns = transcript.turns.clone();
            turns.push(ChatTurn::user(text.trim()));
            transcript.dispatch(ChatAction::Send(text));
            input.set(String::new());

            let transcript = transcript.clone();
            let cfg = cfg.clone();
            spawn_local(async move {
                match request_reply(&cfg, &turns).await {
                    Ok(reply) => transcript.dispatch(ChatAction::Reply(reply)),
                    Err(err) => {
                        warn!(%err, "chat request failed");
                        transcript.dispatch(ChatAction::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(el.value());
        })
    };
    let on_key = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send.emit(());
            }
        })
    };
    let on_click = {
        let send = send.clone();
        Callback::from(move |_| send.emit(()))
    };
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let sending = transcript.sending;
    let placeholder = if sending { "Waiting for response..." } else { "Ask about space, planets, or NASA missions..." };
    let messages = transcript.turns.iter().map(|turn| {
        let user = turn.role == ChatRole::User;
        let row = if user { "display:flex; justify-content:flex-end;" } else { "display:flex; justify-content:flex-start;" };
        let bubble = if user {
            "max-width:80%; padding:8px 12px; border-radius:12px 12px 0 12px; font-size:13px; background:#2563eb;"
        } else {
            "max-width:80%; padding:8px 12px; border-radius:0 12px 12px 12px; font-size:13px; background:#573482;"
        };
        html! { <div style={row}><span style={bubble}>{ turn.text.clone() }</span></div> }
    });

    html! {
        <div style="position:absolute; top:20px; right:24px; z-index:10; width:350px; height:450px; display:flex; flex-direction:column; padding:16px; background:rgba(3,7,18,0.95); border:2px solid #573482; border-radius:12px; box-shadow:0 0 25px #573482;">
            <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:12px; padding-bottom:8px; border-bottom:2px solid #573482;">
                <h3 style="margin:0; color:#8663B0; font-size:18px;">{"NASA AI Assistant"}</h3>
                <button onclick={close} title="Close Chat" style="background:none; border:none; color:#ef4444; font-size:20px; cursor:pointer;">{"✖"}</button>
            </div>
            <div style="flex:1; overflow-y:auto; display:flex; flex-direction:column; gap:12px; padding:12px; background:#111827; border:1px solid #573482; border-radius:8px;">
                { for messages }
            </div>
            <div style="display:flex; gap:8px; margin-top:12px;">
                <input type="text" value={(*input).clone()} oninput={on_input} onkeydown={on_key} placeholder={placeholder} disabled={sending}
                    style="flex:1; padding:10px; border-radius:8px; border:1px solid #573482; background:#1f2937; color:#fff;" />
                <button onclick={on_click} disabled={!transcript.can_send(&input)}
                    style="padding:8px 16px; border-radius:8px; border:none; background:#573482; color:#fff; font-weight:600;">
                    { if sending { "..." } else { "Send" } }
                </button>
            </div>
        </div>
    }
}
