//! Legal chat - View Component

use contracts::domain::a001_chat_message::{ChatMessage, Sender};
use leptos::prelude::*;
use thaw::*;

use super::sidebar::ChatSidebar;
use super::view_model::ChatVm;
use crate::shared::icons::icon;

fn message_class(sender: Sender) -> String {
    format!("message message--{}", sender.as_str())
}

fn message_view(msg: ChatMessage) -> impl IntoView {
    view! {
        <div class=message_class(msg.sender)>
            <div class="message__avatar">{msg.sender.avatar_label()}</div>
            <div>
                <div class="message__bubble">{msg.content.clone()}</div>
                <div class="message__time">{msg.time_label()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let vm = ChatVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // автопрокрутка к последнему сообщению
    Effect::new(move |_| {
        vm.session.with(|s| (s.messages().len(), s.is_pending()));
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_| vm.send());
    let handle_new_chat = Callback::new(move |_| vm.new_chat());

    view! {
        <div class="chat">
            <ChatSidebar on_new_chat=handle_new_chat />

            <div class="chat__main">
                <div class="chat__header">
                    <div>
                        <h2 style="font-size: 18px; font-weight: 600; margin: 0;">"Legal AI Assistant"</h2>
                        <p style="font-size: 14px; color: var(--gray-500); margin: 4px 0 0;">
                            "Your personal legal consultation chat"
                        </p>
                    </div>
                    <span class="chat__online">"Online"</span>
                </div>

                <div node_ref=messages_container_ref class="chat__messages">
                    <For
                        each=move || vm.session.with(|s| s.messages().to_vec())
                        key=|msg| msg.id
                        let:msg
                    >
                        {message_view(msg)}
                    </For>

                    <Show when=move || vm.is_pending()>
                        <div class="message">
                            <div class="message__avatar">"AI"</div>
                            <div class="message__bubble">
                                <span class="typing"><span></span><span></span><span></span></span>
                            </div>
                        </div>
                    </Show>
                </div>

                <div class="chat__composer">
                    <div style="max-width: 896px; margin: 0 auto;">
                        {move || {
                            vm.error
                                .get()
                                .map(|e| {
                                    view! {
                                        <MessageBar intent=MessageBarIntent::Error>
                                            <div>{e}</div>
                                        </MessageBar>
                                    }
                                })
                        }}
                        <Flex align=FlexAlign::End style="gap: 12px;">
                            <div style="flex: 1;">
                                <Textarea
                                    value=vm.input
                                    placeholder="Ask me anything about legal matters..."
                                    attr:style="width: 100%; min-height: 60px; max-height: 128px; resize: none;"
                                    disabled=Signal::derive(move || vm.is_pending())
                                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                                        // Enter отправляет, Shift+Enter - перенос строки
                                        if ev.key() == "Enter" && !ev.shift_key() {
                                            ev.prevent_default();
                                            handle_send.run(());
                                        }
                                    }
                                />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || !vm.can_send())
                                on_click=move |_| handle_send.run(())
                            >
                                {move || {
                                    if vm.is_pending() {
                                        view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                                    } else {
                                        view! { {icon("send")} " Send" }.into_any()
                                    }
                                }}
                            </Button>
                        </Flex>
                        <div class="chat__disclaimer">
                            "Legal AI can make mistakes. Consider checking important information with a qualified attorney."
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_class_marks_sender() {
        assert_eq!(message_class(Sender::User), "message message--user");
        assert_eq!(message_class(Sender::Assistant), "message message--assistant");
    }
}
