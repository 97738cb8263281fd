use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};

const CHAT_SCRIPT: &str = r#"
document.getElementById('chat-form').addEventListener('submit', async (ev) => {
  ev.preventDefault();
  const input = document.getElementById('message');
  const log = document.getElementById('chat-log');
  const text = input.value.trim();
  if (!text) return;
  const add = (who, body) => {
    const p = document.createElement('p');
    p.className = who;
    p.textContent = body;
    log.appendChild(p);
  };
  add('user', text);
  input.value = '';
  const res = await fetch('/chat', { method: 'POST', body: new URLSearchParams({ message: text }) });
  const data = await res.json();
  add('bot', data.response || data.error || '');
  (data.properties || []).forEach((p) => {
    const a = document.createElement('a');
    a.href = '/property/' + p.id;
    a.textContent = p.alamat || p.kecamatan || p.id;
    log.appendChild(a);
  });
});
"#;

pub fn chat_page() -> Markup {
    desktop_layout(
        "Asisten Properti",
        html! {
            main class="container" {
                h1 { "Asisten Properti" }
                p class="muted" { "Tanyakan apa saja tentang properti, harga, atau lokasi." }

                div id="chat-log" class="chat-log" style="min-height: 240px; border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-bottom: 1rem;" {}

                form id="chat-form" method="post" action="/chat" style="display: flex; gap: 8px;" {
                    input type="text" id="message" name="message" placeholder="Tulis pesan..." autocomplete="off" required style="flex: 1; padding: 8px;";
                    button type="submit" class="primary" { "Kirim" }
                }

                script { (PreEscaped(CHAT_SCRIPT)) }
            }
        },
    )
}
